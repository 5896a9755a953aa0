use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::config::ConvertConfig;
use crate::error::{Result, Tab2SpaceError};
use crate::expand::{count_tabs, try_expand_tabs};
use crate::naming::derive_output_path;
use crate::report::Reporter;

/// What happened to the source file after its converted copy was written.
#[derive(Debug)]
pub enum OriginalFile {
    Kept,
    Removed,
    /// The copy was written but the source could not be removed.
    RemoveFailed(Tab2SpaceError),
}

/// Outcome of converting one file.
#[derive(Debug)]
pub struct Conversion {
    pub source: PathBuf,
    pub output: PathBuf,
    pub bytes_read: usize,
    pub bytes_written: usize,
    pub tabs_replaced: usize,
    pub original: OriginalFile,
}

/// Totals for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub skipped: usize,
    pub delete_failures: usize,
}

type RemoveFn = fn(&Path) -> io::Result<()>;

/// Converts files one at a time with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Converter {
    config: ConvertConfig,
    remove_file: RemoveFn,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            remove_file: |path| fs::remove_file(path),
        }
    }

    /// Read `path` fully, expand its tabs and write the result to the derived
    /// output path. Removes the source afterwards when `delete_old` is set.
    pub fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let mut file = File::open(path).map_err(|source| Tab2SpaceError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let metadata = file.metadata().map_err(|source| Tab2SpaceError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.is_dir() {
            return Err(Tab2SpaceError::IsDirectory(path.to_path_buf()));
        }

        let mut data = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
        file.read_to_end(&mut data)
            .map_err(|source| Tab2SpaceError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        drop(file);

        let tabs_replaced = count_tabs(&data);
        let expanded = try_expand_tabs(&data, self.config.tab_width).ok_or_else(|| {
            Tab2SpaceError::TooLarge {
                path: path.to_path_buf(),
                tab_width: self.config.tab_width.get(),
            }
        })?;
        debug!(
            path = %path.display(),
            bytes_read = data.len(),
            bytes_written = expanded.len(),
            tabs_replaced,
            "expanded tabs"
        );

        let output = derive_output_path(path);
        trace!(source = %path.display(), output = %output.display(), "derived output path");

        let mut out = File::create(&output).map_err(|source| Tab2SpaceError::Create {
            path: output.clone(),
            source,
        })?;
        out.write_all(&expanded)
            .and_then(|()| out.flush())
            .map_err(|source| Tab2SpaceError::Write {
                path: output.clone(),
                source,
            })?;
        drop(out);

        let original = if self.config.delete_old {
            match (self.remove_file)(path) {
                Ok(()) => {
                    debug!(path = %path.display(), "removed original");
                    OriginalFile::Removed
                }
                Err(source) => OriginalFile::RemoveFailed(Tab2SpaceError::Remove {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        } else {
            OriginalFile::Kept
        };

        Ok(Conversion {
            source: path.to_path_buf(),
            output,
            bytes_read: data.len(),
            bytes_written: expanded.len(),
            tabs_replaced,
            original,
        })
    }

    /// Convert every path in order. A failure on one path is reported and the
    /// next path is processed.
    pub fn run<P, R>(&self, paths: &[P], reporter: &mut R) -> RunSummary
    where
        P: AsRef<Path>,
        R: Reporter + ?Sized,
    {
        let mut summary = RunSummary::default();

        for path in paths {
            match self.convert_file(path.as_ref()) {
                Ok(conversion) => {
                    summary.converted += 1;
                    if matches!(conversion.original, OriginalFile::RemoveFailed(_)) {
                        summary.delete_failures += 1;
                    }
                    reporter.converted(&conversion);
                }
                Err(e) => {
                    debug!(path = %path.as_ref().display(), error = %e, "skipping");
                    summary.skipped += 1;
                    reporter.skipped(&e);
                }
            }
        }

        summary
    }
}

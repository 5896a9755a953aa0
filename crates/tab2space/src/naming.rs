//! Output file naming.
//!
//! The converted copy is written next to the original under a name carrying a
//! `.fixed.` infix before the last extension, so the source is never
//! overwritten. The rule works on the raw string and reproduces two quirks:
//! a name without any dot gets the infix as a prefix (`README` becomes
//! `.fixed.README`), and dots before the last one are dropped
//! (`archive.tar.gz` becomes `archivetar.fixed.gz`).

use std::path::{Path, PathBuf};

const FIXED_INFIX: &str = ".fixed.";

/// Derive the output name for `input`. Applies to the whole string, including
/// any directory components.
pub fn derive_output_name(input: &str) -> String {
    match input.rsplit_once('.') {
        Some((head, last)) => {
            let mut name: String = head.split('.').collect();
            name.push_str(FIXED_INFIX);
            name.push_str(last);
            name
        }
        None => format!("{FIXED_INFIX}{input}"),
    }
}

/// Same rule as [`derive_output_name`], applied to a path. On Unix the rule
/// runs on the raw bytes, so names that are not UTF-8 keep distinct outputs.
#[cfg(unix)]
pub fn derive_output_path(input: &Path) -> PathBuf {
    use std::ffi::OsString;
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let bytes = input.as_os_str().as_bytes();
    let name = match bytes.iter().rposition(|&b| b == b'.') {
        Some(dot) => {
            let (head, last) = (&bytes[..dot], &bytes[dot + 1..]);
            let mut name: Vec<u8> = head.iter().copied().filter(|&b| b != b'.').collect();
            name.extend_from_slice(FIXED_INFIX.as_bytes());
            name.extend_from_slice(last);
            name
        }
        None => [FIXED_INFIX.as_bytes(), bytes].concat(),
    };
    PathBuf::from(OsString::from_vec(name))
}

/// Same rule as [`derive_output_name`], applied to a path. Non UTF-8 parts are
/// replaced lossily.
#[cfg(not(unix))]
pub fn derive_output_path(input: &Path) -> PathBuf {
    PathBuf::from(derive_output_name(&input.to_string_lossy()))
}

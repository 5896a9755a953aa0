use std::io::{self, Write};

use crate::convert::{Conversion, OriginalFile};
use crate::error::Tab2SpaceError;

/// Receives per-file outcomes from [`crate::Converter::run`].
pub trait Reporter {
    fn converted(&mut self, conversion: &Conversion);

    fn skipped(&mut self, error: &Tab2SpaceError);
}

/// Prints progress to `out` and problems to `err`, each line prefixed with the
/// program name.
#[derive(Debug)]
pub struct ConsoleReporter<O, E> {
    program: String,
    out: O,
    err: E,
}

impl ConsoleReporter<io::Stdout, io::Stderr> {
    pub fn stdio(program: impl Into<String>) -> Self {
        Self::new(program, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(program: impl Into<String>, out: O, err: E) -> Self {
        Self {
            program: program.into(),
            out,
            err,
        }
    }

    /// Print a fatal configuration or usage error.
    pub fn error(&mut self, error: &Tab2SpaceError) {
        // Nothing sensible to do if the terminal itself is gone.
        let _ = writeln!(self.err, "{}: {}", self.program, error);
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> Reporter for ConsoleReporter<O, E> {
    fn converted(&mut self, conversion: &Conversion) {
        let _ = writeln!(
            self.out,
            "{}: new content written to file \"{}\".",
            self.program,
            conversion.output.display()
        );

        match &conversion.original {
            OriginalFile::Kept => {}
            OriginalFile::Removed => {
                let _ = writeln!(
                    self.out,
                    "{}: file \"{}\" removed and replaced with \"{}\".",
                    self.program,
                    conversion.source.display(),
                    conversion.output.display()
                );
            }
            OriginalFile::RemoveFailed(e) => self.error(e),
        }
    }

    fn skipped(&mut self, error: &Tab2SpaceError) {
        self.error(error);
    }
}

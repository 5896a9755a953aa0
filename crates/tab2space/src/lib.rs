//! Replace every tab byte in a file with a fixed number of spaces.
//!
//! The converted copy is written next to the original under a `.fixed.` name
//! (see [`naming`]); the original is kept unless [`ConvertConfig::delete_old`]
//! is set.

pub mod config;
pub mod convert;
pub mod error;
pub mod expand;
pub mod logging;
pub mod naming;
pub mod report;

pub use config::{ConvertConfig, TabWidth};
pub use convert::{Conversion, Converter, OriginalFile, RunSummary};
pub use error::{Result, Tab2SpaceError};
pub use expand::expand_tabs;
pub use naming::{derive_output_name, derive_output_path};
pub use report::{ConsoleReporter, Reporter};

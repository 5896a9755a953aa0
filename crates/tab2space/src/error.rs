use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Tab2SpaceError {
    #[error("the number of spaces must be greater than 0 (got {0})")]
    InvalidTabSize(i64),

    #[error("could not open file \"{}\": {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not read metadata of \"{}\": {source}", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("skipping directory \"{}\"", .0.display())]
    IsDirectory(PathBuf),

    #[error("problem reading \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "output for \"{}\" would be too large with {tab_width} spaces per tab",
        .path.display()
    )]
    TooLarge { path: PathBuf, tab_width: usize },

    #[error("could not create file \"{}\": {source}", .path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write new content to file \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not delete original file \"{}\": {source}", .path.display())]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Tab2SpaceError>;

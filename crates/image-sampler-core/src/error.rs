use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the image-sampler library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Source directory missing or unreadable
    #[error("Source directory not found or unreadable: {0}")]
    SourceNotFound(PathBuf),

    /// Destination directory could not be created or written to
    #[error("Cannot write to destination {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Requested sample exceeds the available image population
    #[error("Requested a sample of {requested} but only {available} image files are available")]
    InsufficientData { requested: usize, available: usize },

    /// A selected file disappeared between listing and moving
    #[error("File vanished before it could be moved: {path} ({moved} files moved before the conflict)")]
    MoveConflict { path: PathBuf, moved: usize },

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

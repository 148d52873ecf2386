//! Output error types.

use std::path::PathBuf;

use movie_model::ErrorKind;
use thiserror::Error;

/// Errors raised while writing the cleaned catalogue.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The directory that should hold the output does not exist.
    #[error("output directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File I/O error.
    #[error("failed to {operation} file {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// Temp file couldn't be renamed onto the target.
    #[error("failed to move {temp_path} to {target_path}: {source}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OutputError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::OutputAccess
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;

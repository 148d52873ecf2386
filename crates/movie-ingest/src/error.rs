//! Error types for catalogue ingestion.

use std::path::PathBuf;

use movie_model::{ErrorKind, ModelError};
use thiserror::Error;

/// Errors that can occur while loading the input table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Encoding Errors ===
    /// File starts with a byte-order mark of an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File contains bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in {path} at byte {offset}")]
    Encoding { path: PathBuf, offset: usize },

    // === CSV Parsing Errors ===
    /// The CSV reader rejected the file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === Schema Errors ===
    /// Required column not found in the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Data row wider than the header.
    #[error("malformed row in {path}: {source}")]
    MalformedRow {
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FileNotFound { .. } | Self::FileRead { .. } => ErrorKind::InputAccess,
            Self::UnsupportedEncoding { .. } | Self::Encoding { .. } => ErrorKind::Encoding,
            Self::CsvParse { .. }
            | Self::EmptyCsv { .. }
            | Self::MissingColumn { .. }
            | Self::MalformedRow { .. } => ErrorKind::Schema,
        }
    }

    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/movies.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/movies.csv");
        assert_eq!(err.kind(), ErrorKind::InputAccess);
    }

    #[test]
    fn test_not_found_maps_to_file_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::from_io(std::path::Path::new("movies.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::from_io(std::path::Path::new("movies.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_error_kinds() {
        let err = IngestError::Encoding {
            path: PathBuf::from("movies.csv"),
            offset: 3,
        };
        assert_eq!(err.kind(), ErrorKind::Encoding);
        let err = IngestError::MissingColumn {
            column: "title".to_string(),
            path: PathBuf::from("movies.csv"),
        };
        assert_eq!(err.kind(), ErrorKind::Schema);
    }
}

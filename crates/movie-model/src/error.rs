use thiserror::Error;

/// Failure categories of a pipeline run.
///
/// Every crate-level error maps onto exactly one of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input file missing or unreadable.
    InputAccess,
    /// Required column missing or table malformed.
    Schema,
    /// Input bytes are not valid UTF-8.
    Encoding,
    /// Output file or directory cannot be written.
    OutputAccess,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::InputAccess => "input access error",
            Self::Schema => "schema error",
            Self::Encoding => "encoding error",
            Self::OutputAccess => "output access error",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("required column '{column}' not found")]
    MissingColumn { column: String },
    #[error("row {line} has {found} cells but the header has {expected}")]
    RowWidth {
        line: u64,
        expected: usize,
        found: usize,
    },
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingColumn { .. } | Self::RowWidth { .. } => ErrorKind::Schema,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#![deny(unsafe_code)]

use crate::error::{ModelError, Result};

/// Tokens a dataframe loader reads as null in addition to the empty cell.
const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true when `raw` denotes a missing value.
pub fn is_missing_token(raw: &str) -> bool {
    MISSING_TOKENS.contains(&raw)
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Classify a raw CSV field. The text is kept verbatim (no trimming).
    pub fn from_raw(raw: &str) -> Self {
        if is_missing_token(raw) {
            Self::Missing
        } else {
            Self::Text(raw.to_string())
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// One data row of the input table with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawRow {
    pub line: u64,
    pub cells: Vec<CellValue>,
}

/// Row-oriented table as read from disk, before any transformation.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding short rows with missing cells.
    ///
    /// Rows wider than the header are rejected.
    pub fn push_row(&mut self, line: u64, mut cells: Vec<CellValue>) -> Result<()> {
        let expected = self.headers.len();
        if cells.len() > expected {
            return Err(ModelError::RowWidth {
                line,
                expected,
                found: cells.len(),
            });
        }
        cells.resize(expected, CellValue::Missing);
        self.rows.push(RawRow { line, cells });
        Ok(())
    }

    /// Position of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ModelError::MissingColumn {
                column: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

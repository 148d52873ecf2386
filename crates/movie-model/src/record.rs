//! Per-record results of the cleaning transform.

use std::fmt;

use crate::columns::UNKNOWN_YEAR;
use crate::table::CellValue;
use crate::vocabulary::GenreVocabulary;

/// Release year derived from a title's trailing annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ReleaseYear {
    /// A single four-digit year, e.g. `1995`.
    Single(String),
    /// A year range, e.g. `2004-2006`.
    Range { start: String, end: String },
    /// No annotation was found.
    Unknown,
}

impl ReleaseYear {
    /// Build from the captured annotation text (`YYYY` or `YYYY-YYYY`).
    pub fn from_annotation(text: &str) -> Self {
        match text.split_once('-') {
            Some((start, end)) => Self::Range {
                start: start.to_string(),
                end: end.to_string(),
            },
            None => Self::Single(text.to_string()),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl fmt::Display for ReleaseYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(year) => f.write_str(year),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
            Self::Unknown => f.write_str(UNKNOWN_YEAR),
        }
    }
}

/// A record after field cleanup, before the null-title filter and encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieRecord {
    /// 1-based line of the record in the source file.
    pub line: u64,
    /// Original cells in header order.
    pub cells: Vec<CellValue>,
    /// Cleaned title; `None` when the source title was missing.
    pub title: Option<String>,
    pub year: ReleaseYear,
    pub genres: Vec<String>,
}

/// A finished output record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRecord {
    pub line: u64,
    pub cells: Vec<CellValue>,
    pub title: String,
    pub year: ReleaseYear,
    pub genres: Vec<String>,
    /// Membership flags aligned with the table's [`GenreVocabulary`].
    pub indicators: Vec<u8>,
}

impl CleanRecord {
    pub fn num_genres(&self) -> usize {
        self.genres.len()
    }
}

/// The cleaned catalogue, ready to be written.
#[derive(Debug, Clone)]
pub struct CleanTable {
    /// Input headers in their original order.
    pub headers: Vec<String>,
    pub title_index: usize,
    pub genres_index: usize,
    pub vocabulary: GenreVocabulary,
    pub records: Vec<CleanRecord>,
}

impl CleanTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records carrying each genre, in vocabulary order.
    pub fn genre_frequencies(&self) -> Vec<(&str, usize)> {
        self.vocabulary
            .iter()
            .enumerate()
            .map(|(idx, genre)| {
                let count = self
                    .records
                    .iter()
                    .filter(|record| record.indicators.get(idx).copied() == Some(1))
                    .count();
                (genre, count)
            })
            .collect()
    }
}

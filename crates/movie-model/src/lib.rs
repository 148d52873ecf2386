//! Data model for the movie catalogue cleaning pipeline.
//!
//! - **columns**: fixed column names and literals of the catalogue format
//! - **table**: the raw table as read from CSV ([`RawTable`], [`CellValue`])
//! - **record**: per-record transform results ([`MovieRecord`], [`CleanRecord`])
//! - **vocabulary**: the dataset-wide genre vocabulary ([`GenreVocabulary`])

pub mod columns;
pub mod error;
pub mod record;
pub mod table;
pub mod vocabulary;

pub use error::{ErrorKind, ModelError, Result};
pub use record::{CleanRecord, CleanTable, MovieRecord, ReleaseYear};
pub use table::{CellValue, RawRow, RawTable, is_missing_token};
pub use vocabulary::GenreVocabulary;

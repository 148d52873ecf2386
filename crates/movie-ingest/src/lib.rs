//! Movie catalogue ingestion.
//!
//! Reads a UTF-8 CSV file into a [`RawTable`](movie_model::RawTable),
//! rejecting files that cannot be decoded or that lack the `title` and
//! `genres` columns.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use movie_ingest::read_movie_table;
//!
//! let table = read_movie_table(Path::new("scripts/datasets/movies.csv"))?;
//! println!("{} rows", table.len());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use crate::csv::{decode_utf8, read_movie_table, read_table};

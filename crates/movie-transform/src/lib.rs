//! Movie catalogue cleaning transforms.
//!
//! This crate turns a [`RawTable`](movie_model::RawTable) into a
//! [`CleanTable`](movie_model::CleanTable):
//!
//! - **title**: year extraction and title cleanup from the final parenthetical
//! - **genres**: splitting the pipe-delimited genre tags
//! - **encoding**: the dataset-wide vocabulary and per-record membership flags
//! - **duplicates**: the duplicate-title diagnostic
//! - **pipeline**: the ordered pass over all records
//!
//! The vocabulary is computed over every record before any record is
//! encoded, so all output rows share the same genre columns.

pub mod duplicates;
pub mod encoding;
pub mod genres;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod title;

pub use duplicates::duplicate_titles;
pub use encoding::{build_vocabulary, encode_records};
pub use genres::split_genres;
pub use options::TransformOptions;
pub use pipeline::{TransformOutput, clean_record, transform_table};
pub use report::TransformReport;
pub use title::{clean_title, extract_year};

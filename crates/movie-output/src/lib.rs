//! Output generation for cleaned movie catalogues.
//!
//! The cleaned table is serialized as UTF-8 CSV with one header row:
//! the input columns (with `title` and `genres` replaced by their cleaned
//! values), then `year`, `num_genres` and one 0/1 column per genre in
//! vocabulary order. Files are written to a temporary sibling and renamed
//! into place, so a failed run never leaves a partial file at the target.

mod atomic;
mod csv_writer;
mod error;

pub use atomic::{ensure_parent_dir, temp_path_for, write_atomic};
pub use csv_writer::{
    format_genres, output_headers, record_fields, serialize_clean_table, write_clean_csv,
};
pub use error::{OutputError, Result};

//! CSV reading utilities.

mod reader;

pub use reader::{decode_utf8, read_movie_table, read_table};

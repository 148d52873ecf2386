//! Column names and literals used by the movie catalogue format.
//!
//! Column names are case-sensitive and not configurable.

/// Input/output column holding the movie title.
pub const TITLE: &str = "title";

/// Input/output column holding the genre tags.
pub const GENRES: &str = "genres";

/// Derived column holding the release year.
pub const YEAR: &str = "year";

/// Derived column holding the number of genres of a record.
pub const NUM_GENRES: &str = "num_genres";

/// Columns every input table must provide.
pub const REQUIRED: &[&str] = &[TITLE, GENRES];

/// Literal used by the source data to mean "no genres".
pub const NO_GENRES_SENTINEL: &str = "(no genres listed)";

/// Delimiter between genre tags.
pub const GENRE_DELIMITER: char = '|';

/// Year value written when a title carries no year annotation.
pub const UNKNOWN_YEAR: &str = "Unknown";

use serde::Serialize;

/// Counts describing one transform run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformReport {
    /// Records read from the input table.
    pub input_rows: usize,
    /// Records dropped because their title was missing.
    pub dropped_rows: usize,
    /// Records in the cleaned table.
    pub output_rows: usize,
    /// Size of the genre vocabulary (number of encoded columns).
    pub genres: usize,
    /// Output records without a year annotation.
    pub unknown_years: usize,
    /// Output records without any genre.
    pub without_genres: usize,
    /// Output records whose title is shared with another record.
    pub duplicate_titles: usize,
}

impl TransformReport {
    pub fn has_duplicates(&self) -> bool {
        self.duplicate_titles > 0
    }
}

use movie_model::columns;

/// Literals recognised by the cleaning transforms.
///
/// The defaults match the MovieLens catalogue format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Separator between genre tags.
    pub genre_delimiter: char,
    /// Genre value meaning "no genres".
    pub no_genres_sentinel: String,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            genre_delimiter: columns::GENRE_DELIMITER,
            no_genres_sentinel: columns::NO_GENRES_SENTINEL.to_string(),
        }
    }
}

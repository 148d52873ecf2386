//! Genre tag splitting.

use crate::options::TransformOptions;

/// Split a raw genre cell into its ordered tags.
///
/// A missing cell and the "no genres" sentinel both yield an empty list.
/// The split is literal: empty tags between adjacent delimiters are kept.
pub fn split_genres(raw: Option<&str>, options: &TransformOptions) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    let genres: Vec<String> = raw
        .split(options.genre_delimiter)
        .map(str::to_string)
        .collect();
    if genres.len() == 1 && genres[0] == options.no_genres_sentinel {
        return Vec::new();
    }
    genres
}

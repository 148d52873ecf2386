//! Dataset-wide genre vocabulary for multi-label encoding.

use std::collections::BTreeSet;

/// Sorted, de-duplicated set of genre names.
///
/// Column order of the encoding follows the byte order of the names, which
/// keeps repeated runs over the same input byte-identical.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenreVocabulary {
    genres: Vec<String>,
}

impl GenreVocabulary {
    pub fn from_genres<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = genres.into_iter().map(Into::into).collect();
        Self {
            genres: unique.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.genres.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.genres
    }

    pub fn index_of(&self, genre: &str) -> Option<usize> {
        self.genres
            .binary_search_by(|probe| probe.as_str().cmp(genre))
            .ok()
    }

    /// Membership vector of `genres` over this vocabulary (1 = present).
    ///
    /// Genres outside the vocabulary are ignored.
    pub fn encode(&self, genres: &[String]) -> Vec<u8> {
        let mut indicators = vec![0u8; self.genres.len()];
        for genre in genres {
            if let Some(idx) = self.index_of(genre) {
                indicators[idx] = 1;
            }
        }
        indicators
    }
}

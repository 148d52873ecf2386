//! Multi-label genre encoding.
//!
//! Encoding is two passes: [`build_vocabulary`] scans every record, then
//! [`encode_records`] assigns each record its membership flags against that
//! single vocabulary.

use movie_model::{CleanRecord, GenreVocabulary, MovieRecord};
use tracing::debug;

/// Collect the sorted set of genres used anywhere in `records`.
pub fn build_vocabulary(records: &[MovieRecord]) -> GenreVocabulary {
    let vocabulary = GenreVocabulary::from_genres(
        records
            .iter()
            .flat_map(|record| record.genres.iter().cloned()),
    );
    debug!(genres = vocabulary.len(), "genre vocabulary built");
    vocabulary
}

/// Encode records that carry a title; records without one are dropped.
///
/// Returns the encoded records in input order and the number dropped.
pub fn encode_records(
    records: Vec<MovieRecord>,
    vocabulary: &GenreVocabulary,
) -> (Vec<CleanRecord>, usize) {
    let total = records.len();
    let encoded: Vec<CleanRecord> = records
        .into_iter()
        .filter_map(|record| {
            let title = record.title?;
            Some(CleanRecord {
                line: record.line,
                cells: record.cells,
                title,
                year: record.year,
                indicators: vocabulary.encode(&record.genres),
                genres: record.genres,
            })
        })
        .collect();
    let dropped = total - encoded.len();
    (encoded, dropped)
}

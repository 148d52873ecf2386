//! The ordered cleaning pass over a whole table.
//!
//! 1. **Clean**: per record, extract the year, clean the title, split genres
//! 2. **Vocabulary**: collect the genre set across every record
//! 3. **Encode**: drop untitled records, assign membership flags
//! 4. **Report**: count unknown years and duplicate titles

use std::time::Instant;

use movie_model::{CleanTable, MovieRecord, RawRow, RawTable, Result, columns};
use tracing::{debug, info, info_span, warn};

use crate::duplicates::duplicate_titles;
use crate::encoding::{build_vocabulary, encode_records};
use crate::genres::split_genres;
use crate::options::TransformOptions;
use crate::report::TransformReport;
use crate::title::{clean_title, extract_year};

/// Number of duplicate titles named in the log.
const DUPLICATE_EXAMPLES: usize = 5;

/// The cleaned table and the counts gathered while building it.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub table: CleanTable,
    pub report: TransformReport,
}

/// Apply the field-level transforms to one row.
///
/// The year is read from the raw title before cleanup. A missing title
/// stays missing and yields an unknown year.
pub fn clean_record(
    row: &RawRow,
    title_index: usize,
    genres_index: usize,
    options: &TransformOptions,
) -> MovieRecord {
    let raw_title = row.cells.get(title_index).and_then(|cell| cell.as_str());
    let raw_genres = row.cells.get(genres_index).and_then(|cell| cell.as_str());
    MovieRecord {
        line: row.line,
        cells: row.cells.clone(),
        title: raw_title.map(clean_title),
        year: raw_title.map_or(movie_model::ReleaseYear::Unknown, extract_year),
        genres: split_genres(raw_genres, options),
    }
}

/// Transform a raw catalogue table into its cleaned, encoded form.
///
/// # Errors
///
/// Returns [`movie_model::ModelError::MissingColumn`] when `title` or
/// `genres` is absent from the header.
pub fn transform_table(raw: RawTable, options: &TransformOptions) -> Result<TransformOutput> {
    let span = info_span!("transform", rows = raw.len());
    let _guard = span.enter();
    let start = Instant::now();

    let title_index = raw.require_column(columns::TITLE)?;
    let genres_index = raw.require_column(columns::GENRES)?;
    let input_rows = raw.len();

    let records: Vec<MovieRecord> = raw
        .rows
        .iter()
        .map(|row| clean_record(row, title_index, genres_index, options))
        .collect();

    let vocabulary = build_vocabulary(&records);
    let (records, dropped_rows) = encode_records(records, &vocabulary);
    if dropped_rows > 0 {
        warn!(dropped_rows, "dropped records without a title");
    }

    let duplicates = duplicate_titles(&records);
    let duplicate_count: usize = duplicates.values().sum();
    if !duplicates.is_empty() {
        let examples: Vec<&str> = duplicates.keys().take(DUPLICATE_EXAMPLES).copied().collect();
        debug!(groups = duplicates.len(), examples = ?examples, "duplicate titles found");
    }

    let report = TransformReport {
        input_rows,
        dropped_rows,
        output_rows: records.len(),
        genres: vocabulary.len(),
        unknown_years: records.iter().filter(|r| r.year.is_unknown()).count(),
        without_genres: records.iter().filter(|r| r.genres.is_empty()).count(),
        duplicate_titles: duplicate_count,
    };

    info!(
        input_rows = report.input_rows,
        output_rows = report.output_rows,
        genres = report.genres,
        unknown_years = report.unknown_years,
        duplicate_titles = report.duplicate_titles,
        duration_ms = start.elapsed().as_millis(),
        "transform complete"
    );

    Ok(TransformOutput {
        table: CleanTable {
            headers: raw.headers,
            title_index,
            genres_index,
            vocabulary,
            records,
        },
        report,
    })
}

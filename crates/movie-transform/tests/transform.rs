//! Behaviour of the full cleaning pass on small catalogues.

use movie_model::{CellValue, RawTable, ReleaseYear};
use movie_transform::{TransformOptions, transform_table};

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut table = RawTable::new(headers.iter().map(|h| (*h).to_string()).collect());
    for (idx, row) in rows.iter().enumerate() {
        let cells = row.iter().map(|value| CellValue::from_raw(value)).collect();
        table.push_row(idx as u64 + 2, cells).expect("push row");
    }
    table
}

fn movies(rows: &[&[&str]]) -> RawTable {
    table(&["movieId", "title", "genres"], rows)
}

#[test]
fn toy_story_end_to_end() {
    let raw = movies(&[
        &["1", "Toy Story (1995)", "Adventure|Animation|Children"],
        &["2", "Heat (1995)", "Action|Crime|Thriller"],
    ]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");
    let table = &output.table;

    let names: Vec<&str> = table.vocabulary.iter().collect();
    assert_eq!(
        names,
        vec!["Action", "Adventure", "Animation", "Children", "Crime", "Thriller"]
    );

    let toy = &table.records[0];
    assert_eq!(toy.title, "Toy Story");
    assert_eq!(toy.year, ReleaseYear::Single("1995".to_string()));
    assert_eq!(toy.genres, vec!["Adventure", "Animation", "Children"]);
    assert_eq!(toy.num_genres(), 3);
    assert_eq!(toy.indicators, vec![0, 1, 1, 1, 0, 0]);
    assert_eq!(toy.cells[0], CellValue::Text("1".to_string()));
}

#[test]
fn no_genres_sentinel_encodes_to_zeros() {
    let raw = movies(&[
        &["1", "Heat (1995)", "Action"],
        &["2", "Lost Reel (1921)", "(no genres listed)"],
    ]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");
    let lost = &output.table.records[1];

    assert!(lost.genres.is_empty());
    assert_eq!(lost.num_genres(), 0);
    assert_eq!(lost.indicators, vec![0]);
    assert_eq!(output.report.without_genres, 1);
}

#[test]
fn missing_year_defaults_to_unknown() {
    let raw = movies(&[&["1", "Babylon 5", "Sci-Fi"]]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");
    let record = &output.table.records[0];

    assert_eq!(record.year, ReleaseYear::Unknown);
    assert_eq!(record.year.to_string(), "Unknown");
    assert_eq!(output.report.unknown_years, 1);
}

#[test]
fn only_missing_titles_are_dropped() {
    let raw = movies(&[
        &["1", "Heat (1995)", "Action"],
        &["2", "", "Western"],
        &["3", "(1999)", "Drama"],
        &["4", "Up (2009)", ""],
    ]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");

    assert_eq!(output.report.input_rows, 4);
    assert_eq!(output.report.dropped_rows, 1);
    assert_eq!(output.report.output_rows, 3);
    let lines: Vec<u64> = output.table.records.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 4, 5]);
    assert_eq!(output.table.records[1].title, "");
    assert!(output.table.records[2].genres.is_empty());
}

#[test]
fn vocabulary_includes_genres_of_dropped_records() {
    let raw = movies(&[&["1", "Heat (1995)", "Action"], &["2", "", "Western"]]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");

    let names: Vec<&str> = output.table.vocabulary.iter().collect();
    assert_eq!(names, vec!["Action", "Western"]);
    assert_eq!(output.table.records[0].indicators, vec![1, 0]);
}

#[test]
fn duplicate_titles_are_reported_not_removed() {
    let raw = movies(&[
        &["1", "Hamlet (1990)", "Drama"],
        &["2", "Hamlet (1996)", "Crime|Drama"],
        &["3", "Heat (1995)", "Action"],
    ]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");

    assert_eq!(output.report.duplicate_titles, 2);
    assert!(output.report.has_duplicates());
    assert_eq!(output.table.len(), 3);
}

#[test]
fn category_columns_sum_to_num_genres() {
    let raw = movies(&[
        &["1", "A (2001)", "Drama|War|Drama"],
        &["2", "B (2002)", "Comedy"],
        &["3", "C (2003)", "(no genres listed)"],
    ]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");
    for record in &output.table.records {
        let unique: std::collections::BTreeSet<&String> = record.genres.iter().collect();
        let sum: usize = record.indicators.iter().map(|v| usize::from(*v)).sum();
        assert_eq!(sum, unique.len());
    }
    assert_eq!(output.table.records[1].num_genres(), 1);
}

#[test]
fn missing_required_column_fails() {
    let raw = table(&["movieId", "title"], &[&["1", "Heat (1995)"]]);
    let err = transform_table(raw, &TransformOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "required column 'genres' not found");
}

#[test]
fn empty_table_has_empty_vocabulary() {
    let raw = movies(&[]);
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");
    assert!(output.table.is_empty());
    assert!(output.table.vocabulary.is_empty());
    assert_eq!(output.report, movie_transform::TransformReport::default());
}

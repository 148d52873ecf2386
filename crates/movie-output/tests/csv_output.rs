//! Integration tests for writing the cleaned catalogue.

use std::fs;

use movie_model::{CellValue, RawTable};
use movie_output::{OutputError, output_headers, serialize_clean_table, write_clean_csv};
use movie_transform::{TransformOptions, TransformOutput, transform_table};
use tempfile::tempdir;

fn sample_output() -> TransformOutput {
    let rows: &[&[&str]] = &[
        &["1", "Toy Story (1995)", "Adventure|Animation|Children"],
        &[
            "2",
            "City of Lost Children, The (Cité des enfants perdus, La) (1995)",
            "Adventure|Drama|Fantasy|Mystery|Sci-Fi",
        ],
        &["3", "Lost Reel", "(no genres listed)"],
        &["4", "", "Western"],
    ];
    let mut raw = RawTable::new(vec![
        "movieId".to_string(),
        "title".to_string(),
        "genres".to_string(),
    ]);
    for (idx, row) in rows.iter().enumerate() {
        let cells = row.iter().map(|value| CellValue::from_raw(value)).collect();
        raw.push_row(idx as u64 + 2, cells).expect("push row");
    }
    transform_table(raw, &TransformOptions::default()).expect("transform")
}

fn render(output: &TransformOutput) -> String {
    let mut buffer = Vec::new();
    serialize_clean_table(&output.table, &mut buffer).expect("serialize");
    String::from_utf8(buffer).expect("utf-8 output")
}

#[test]
fn header_lists_derived_and_genre_columns() {
    let output = sample_output();
    assert_eq!(
        output_headers(&output.table),
        vec![
            "movieId",
            "title",
            "genres",
            "year",
            "num_genres",
            "Adventure",
            "Animation",
            "Children",
            "Drama",
            "Fantasy",
            "Mystery",
            "Sci-Fi",
            "Western",
        ]
    );
}

#[test]
fn cleaned_catalogue_snapshot() {
    let csv = render(&sample_output());
    insta::assert_snapshot!(csv.trim_end(), @r#"
    movieId,title,genres,year,num_genres,Adventure,Animation,Children,Drama,Fantasy,Mystery,Sci-Fi,Western
    1,Toy Story,"['Adventure', 'Animation', 'Children']",1995,3,1,1,1,0,0,0,0,0
    2,"City of Lost Children, The (Cité des enfants perdus, La)","['Adventure', 'Drama', 'Fantasy', 'Mystery', 'Sci-Fi']",1995,5,1,0,0,1,1,1,1,0
    3,Lost Reel,[],Unknown,0,0,0,0,0,0,0,0,0
    "#);
}

#[test]
fn rows_end_with_newline() {
    let csv = render(&sample_output());
    assert!(csv.ends_with("0,0,0,0,0,0,0,0,0\n"));
    assert!(!csv.contains('\r'));
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn write_is_byte_identical_across_runs() {
    let dir = tempdir().expect("temp dir");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    write_clean_csv(&sample_output().table, &first).expect("first write");
    write_clean_csv(&sample_output().table, &second).expect("second write");

    assert_eq!(
        fs::read(&first).expect("read first"),
        fs::read(&second).expect("read second")
    );
}

#[test]
fn missing_output_directory_fails_without_writing() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("cleaned.csv");

    let err = write_clean_csv(&sample_output().table, &path).unwrap_err();
    assert!(matches!(err, OutputError::DirectoryNotFound { .. }));
    assert_eq!(err.kind(), movie_model::ErrorKind::OutputAccess);
    assert!(!path.exists());
}

#[test]
fn missing_passthrough_cells_are_written_empty() {
    let mut raw = RawTable::new(vec![
        "movieId".to_string(),
        "title".to_string(),
        "genres".to_string(),
        "imdbId".to_string(),
    ]);
    raw.push_row(
        2,
        vec![
            CellValue::from_raw("7"),
            CellValue::from_raw("Heat (1995)"),
            CellValue::from_raw("Action"),
            CellValue::from_raw("NA"),
        ],
    )
    .expect("push row");
    let output = transform_table(raw, &TransformOptions::default()).expect("transform");

    let csv = render(&output);
    assert_eq!(
        csv,
        "movieId,title,genres,imdbId,year,num_genres,Action\n7,Heat,['Action'],,1995,1,1\n"
    );
}

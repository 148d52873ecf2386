//! CSV file reading with UTF-8 validation and required-column checks.

use std::path::Path;
use std::time::Instant;

use movie_model::{CellValue, RawTable, columns};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Validate that `bytes` are UTF-8 and return the text without a leading BOM.
///
/// UTF-16 byte-order marks are rejected up front so the error names the
/// encoding instead of pointing at an arbitrary byte offset.
pub fn decode_utf8<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    std::str::from_utf8(body).map_err(|e| IngestError::Encoding {
        path: path.to_path_buf(),
        offset: e.valid_up_to() + (bytes.len() - body.len()),
    })
}

/// Read a CSV file with a single header row into a [`RawTable`].
///
/// Cells are kept verbatim; empty cells and null tokens become
/// [`CellValue::Missing`]. Short rows are padded, wide rows are rejected.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let start = Instant::now();
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let text = decode_utf8(path, &bytes)?;

    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(path, &e))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut table = RawTable::new(headers);
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        let line = record
            .position()
            .map_or(idx as u64 + 2, ::csv::Position::line);
        let cells = record.iter().map(CellValue::from_raw).collect();
        table
            .push_row(line, cells)
            .map_err(|source| IngestError::MalformedRow {
                path: path.to_path_buf(),
                source,
            })?;
    }

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        duration_ms = start.elapsed().as_millis(),
        "csv table loaded"
    );
    Ok(table)
}

/// Read the movie catalogue, requiring the `title` and `genres` columns.
pub fn read_movie_table(path: &Path) -> Result<RawTable> {
    let table = read_table(path)?;
    for column in columns::REQUIRED {
        if table.column_index(column).is_none() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len(),
        "movie catalogue loaded"
    );
    Ok(table)
}

fn csv_error(path: &Path, err: &::csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let text = decode_utf8(Path::new("x.csv"), b"\xEF\xBB\xBFtitle,genres\n").unwrap();
        assert_eq!(text, "title,genres\n");
    }

    #[test]
    fn test_decode_rejects_utf16() {
        let result = decode_utf8(Path::new("x.csv"), &[0xFF, 0xFE, b't', 0]);
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_reports_offset() {
        let result = decode_utf8(Path::new("x.csv"), b"title\n\xC3(");
        assert!(matches!(result, Err(IngestError::Encoding { offset: 6, .. })));
    }

    #[test]
    fn test_read_table_keeps_cells_verbatim() {
        let file = create_temp_csv(b"movieId,title,genres\n1,\" Heat (1995) \",Action\n2,,NA\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["movieId", "title", "genres"]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows[0].cells[1],
            CellValue::Text(" Heat (1995) ".to_string())
        );
        assert_eq!(table.rows[1].cells[1], CellValue::Missing);
        assert_eq!(table.rows[1].cells[2], CellValue::Missing);
    }

    #[test]
    fn test_read_table_tracks_lines() {
        let file = create_temp_csv(b"title,genres\nA (2001),Drama\nB (2002),Comedy\n");
        let table = read_table(file.path()).unwrap();
        let lines: Vec<u64> = table.rows.iter().map(|row| row.line).collect();
        assert_eq!(lines, vec![2, 3]);
    }

    #[test]
    fn test_read_table_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_table(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_table_wide_row() {
        let file = create_temp_csv(b"title,genres\nA,Drama,extra\n");
        let result = read_table(file.path());
        assert!(matches!(result, Err(IngestError::MalformedRow { .. })));
    }
}

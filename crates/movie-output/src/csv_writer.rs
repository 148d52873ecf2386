//! CSV serialization of the cleaned catalogue.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use movie_model::{CleanRecord, CleanTable, columns};
use tracing::info;

use crate::atomic::write_atomic;
use crate::error::{OutputError, Result};

/// Header row of the output file.
pub fn output_headers(table: &CleanTable) -> Vec<String> {
    let mut headers = Vec::with_capacity(table.headers.len() + 2 + table.vocabulary.len());
    headers.extend(table.headers.iter().cloned());
    headers.push(columns::YEAR.to_string());
    headers.push(columns::NUM_GENRES.to_string());
    headers.extend(table.vocabulary.iter().map(str::to_string));
    headers
}

/// Output fields of one record, aligned with [`output_headers`].
pub fn record_fields(table: &CleanTable, record: &CleanRecord) -> Vec<String> {
    let mut fields = Vec::with_capacity(record.cells.len() + 2 + record.indicators.len());
    for (idx, cell) in record.cells.iter().enumerate() {
        if idx == table.title_index {
            fields.push(record.title.clone());
        } else if idx == table.genres_index {
            fields.push(format_genres(&record.genres));
        } else {
            fields.push(cell.as_str().unwrap_or_default().to_string());
        }
    }
    fields.push(record.year.to_string());
    fields.push(record.num_genres().to_string());
    fields.extend(record.indicators.iter().map(u8::to_string));
    fields
}

/// Render a genre list as a bracketed literal: `['Action', 'Drama']`.
///
/// Items are single-quoted unless they contain a single quote and no double
/// quote, in which case they are double-quoted. Unprintable characters are
/// written as `\xNN`, `\uNNNN` or `\UNNNNNNNN` escapes.
pub fn format_genres(genres: &[String]) -> String {
    let items: Vec<String> = genres.iter().map(|genre| quote_item(genre)).collect();
    format!("[{}]", items.join(", "))
}

fn quote_item(value: &str) -> String {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if is_unprintable(c) => push_escape(&mut quoted, c),
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

/// Characters written as escapes: control characters, separators other than
/// the ASCII space, and invisible format characters.
fn is_unprintable(c: char) -> bool {
    c.is_control()
        || (c.is_whitespace() && c != ' ')
        || matches!(
            c,
            '\u{00ad}'
                | '\u{061c}'
                | '\u{180e}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{206f}'
                | '\u{feff}'
                | '\u{fff9}'..='\u{fffb}'
        )
}

fn push_escape(out: &mut String, c: char) {
    let code = u32::from(c);
    if code <= 0xff {
        out.push_str(&format!("\\x{code:02x}"));
    } else if code <= 0xffff {
        out.push_str(&format!("\\u{code:04x}"));
    } else {
        out.push_str(&format!("\\U{code:08x}"));
    }
}

/// Serialize `table` as CSV into `writer`.
pub fn serialize_clean_table<W: Write>(table: &CleanTable, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(output_headers(table))?;
    for record in &table.records {
        csv_writer.write_record(record_fields(table, record))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write `table` to `path`, replacing any existing file atomically.
pub fn write_clean_csv(table: &CleanTable, path: &Path) -> Result<()> {
    let start = Instant::now();
    write_atomic(path, |file| {
        serialize_clean_table(table, file).map_err(|e| OutputError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    })?;
    info!(
        path = %path.display(),
        rows = table.len(),
        columns = table.headers.len() + 2 + table.vocabulary.len(),
        duration_ms = start.elapsed().as_millis(),
        "cleaned catalogue written"
    );
    Ok(())
}

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use movie_cli::pipeline::RunOutcome;

pub fn print_summary(outcome: &RunOutcome) {
    let report = outcome.report();
    println!("Input: {}", outcome.input_path.display());
    if outcome.written {
        println!("Output: {}", outcome.output_path.display());
    } else {
        println!("Output: {} (dry run, not written)", outcome.output_path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Input rows"), Cell::new(report.input_rows)]);
    table.add_row(vec![
        Cell::new("Dropped (no title)"),
        count_cell(report.dropped_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Output rows").add_attribute(Attribute::Bold),
        Cell::new(report.output_rows).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Unknown year"),
        count_cell(report.unknown_years, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Without genres"),
        count_cell(report.without_genres, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate titles"),
        count_cell(report.duplicate_titles, Color::Red),
    ]);
    println!("{table}");
    print_genre_table(outcome);
}

fn print_genre_table(outcome: &RunOutcome) {
    let frequencies = outcome.output.table.genre_frequencies();
    if frequencies.is_empty() {
        return;
    }
    let total = outcome.output.table.len();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Genre"),
        header_cell("Records"),
        header_cell("Share"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for (genre, count) in frequencies {
        table.add_row(vec![
            genre_cell(genre),
            count_cell(count, Color::Green),
            dim_cell(share(count, total)),
        ]);
    }
    println!();
    println!("Genres:");
    println!("{table}");
}

fn share(count: usize, total: usize) -> String {
    if total == 0 {
        "-".to_string()
    } else {
        format!("{:.1}%", count as f64 * 100.0 / total as f64)
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn genre_cell(genre: &str) -> Cell {
    if genre.is_empty() {
        dim_cell("(empty)")
    } else {
        Cell::new(genre).fg(Color::Blue)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_formats_percentages() {
        assert_eq!(share(1, 4), "25.0%");
        assert_eq!(share(0, 0), "-");
    }
}

//! Table styling helpers and the end-of-run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ImportOutcome;

pub fn print_summary(outcome: &ImportOutcome) {
    println!("File: {}", outcome.file_name);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows"),
        header_cell("Columns"),
        header_cell("Mapped"),
        header_cell("Skipped"),
        header_cell("Created"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(outcome.total_rows),
        Cell::new(outcome.columns),
        Cell::new(outcome.mapped),
        Cell::new(outcome.skipped),
        match outcome.committed {
            Some(count) => Cell::new(count)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
            None => dim_cell("dry run"),
        },
    ]);
    println!("{table}");
    if let Some(path) = &outcome.output
        && outcome.committed.is_some()
    {
        println!("Records written to {}", path.display());
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

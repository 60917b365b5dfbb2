//! Row projection: applying a column mapping to parsed rows.

use pulse_model::{ColumnMapping, ParsedTable, ProjectedRecord};

/// Maximum rows shown on the preview step.
pub const PREVIEW_ROWS: usize = 5;

fn project_row(row: &[String], mapping: &ColumnMapping) -> ProjectedRecord {
    let mut record = ProjectedRecord::new();
    for (column, target) in mapping.iter() {
        let value = row.get(column).map(String::as_str).unwrap_or_default();
        record.insert(target, value.to_string());
    }
    record
}

/// Projects every raw row through the mapping.
///
/// Total: a mapped column past the end of a short row reads as the empty
/// string, and target fields without a mapped column stay absent from the
/// record. Derived, never stored; recompute after any mapping edit.
#[must_use]
pub fn project(table: &ParsedTable, mapping: &ColumnMapping) -> Vec<ProjectedRecord> {
    table
        .rows
        .iter()
        .map(|row| project_row(row, mapping))
        .collect()
}

/// Projects the preview slice: the first `min(PREVIEW_ROWS, rows)` rows.
#[must_use]
pub fn project_preview(table: &ParsedTable, mapping: &ColumnMapping) -> Vec<ProjectedRecord> {
    let count = table.row_count().min(PREVIEW_ROWS);
    table.rows[..count]
        .iter()
        .map(|row| project_row(row, mapping))
        .collect()
}

//! Row projection tests.

use pulse_import::{PREVIEW_ROWS, project, project_preview};
use pulse_model::{ClientField, ColumnMapping, ParsedTable};

fn table(headers: &[&str], rows: &[&[&str]]) -> ParsedTable {
    ParsedTable::new(
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
            .collect(),
    )
}

#[test]
fn full_mapping_round_trips_every_cell() {
    let table = table(
        &["First Name", "Email"],
        &[&["Sarah", "sarah@email.com"], &["Marcus", "marcus@email.com"]],
    );
    let mut mapping = ColumnMapping::new();
    mapping.set(0, ClientField::FirstName);
    mapping.set(1, ClientField::Email);

    let records = project(&table, &mapping);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get(ClientField::FirstName), Some("Sarah"));
    assert_eq!(records[0].get(ClientField::Email), Some("sarah@email.com"));
    assert_eq!(records[1].get(ClientField::FirstName), Some("Marcus"));
    assert_eq!(records[1].len(), 2);
}

#[test]
fn short_rows_pad_with_empty_string() {
    let table = table(&["First Name", "Email", "Phone"], &[&["Sarah"]]);
    let mut mapping = ColumnMapping::new();
    mapping.set(0, ClientField::FirstName);
    mapping.set(2, ClientField::Phone);

    let records = project(&table, &mapping);
    assert_eq!(records[0].get(ClientField::FirstName), Some("Sarah"));
    // Mapped but missing from the short row: explicit empty, never a panic.
    assert_eq!(records[0].get(ClientField::Phone), Some(""));
}

#[test]
fn unmapped_fields_are_absent_not_empty() {
    let table = table(&["First Name", "Email"], &[&["Sarah", "sarah@email.com"]]);
    let mut mapping = ColumnMapping::new();
    mapping.set(0, ClientField::FirstName);

    let records = project(&table, &mapping);
    assert!(!records[0].contains(ClientField::Email));
    assert_eq!(records[0].get(ClientField::Email), None);
    assert_eq!(records[0].len(), 1);
}

#[test]
fn empty_mapping_projects_empty_records() {
    let table = table(&["A"], &[&["x"], &["y"]]);
    let records = project(&table, &ColumnMapping::new());
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(pulse_model::ProjectedRecord::is_empty));
}

#[test]
fn preview_is_bounded_by_row_count() {
    let rows: Vec<Vec<String>> = (0..50).map(|i| vec![format!("client{i}")]).collect();
    let big = ParsedTable::new(vec!["First Name".to_string()], rows);
    let mut mapping = ColumnMapping::new();
    mapping.set(0, ClientField::FirstName);

    assert_eq!(project_preview(&big, &mapping).len(), PREVIEW_ROWS);

    let small = table(&["First Name"], &[&["a"], &["b"], &["c"]]);
    assert_eq!(project_preview(&small, &mapping).len(), 3);

    let empty = table(&["First Name"], &[]);
    assert!(project_preview(&empty, &mapping).is_empty());
}

#[test]
fn preview_matches_the_head_of_the_full_projection() {
    let table = table(
        &["First Name"],
        &[&["a"], &["b"], &["c"], &["d"], &["e"], &["f"], &["g"]],
    );
    let mut mapping = ColumnMapping::new();
    mapping.set(0, ClientField::FirstName);

    let full = project(&table, &mapping);
    let preview = project_preview(&table, &mapping);
    assert_eq!(preview.as_slice(), &full[..PREVIEW_ROWS]);
}

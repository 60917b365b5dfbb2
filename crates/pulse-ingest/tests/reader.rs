//! File reading tests.

use std::fs;
use std::path::Path;

use pulse_ingest::{ensure_csv_path, is_csv_name, parse_table, read_import_text};
use pulse_model::ImportError;

#[test]
fn csv_names_are_accepted() {
    assert!(is_csv_name("clients.csv"));
    assert!(is_csv_name("export (2).csv"));
    assert!(!is_csv_name("clients.xlsx"));
    assert!(!is_csv_name("clients.CSV"));
    assert!(!is_csv_name("csv"));
}

#[test]
fn wrong_extension_is_rejected_before_read() {
    // Path does not exist; the extension gate must fire first.
    let error = read_import_text(Path::new("/nonexistent/clients.xlsx")).expect_err("reject");
    assert!(matches!(error, ImportError::UnsupportedFile));
    assert_eq!(error.to_string(), "Please upload a CSV file");
}

#[test]
fn missing_csv_surfaces_io_error() {
    let error = read_import_text(Path::new("/nonexistent/clients.csv")).expect_err("missing file");
    assert!(matches!(error, ImportError::Io(_)));
}

#[test]
fn reads_and_parses_a_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("clients.csv");
    fs::write(&path, "First Name,Email\nSarah,sarah@email.com\n").expect("write csv");

    ensure_csv_path(&path).expect("extension ok");
    let text = read_import_text(&path).expect("read file");
    let table = parse_table(&text).expect("parse");
    assert_eq!(table.headers, vec!["First Name", "Email"]);
    assert_eq!(table.row_count(), 1);
}

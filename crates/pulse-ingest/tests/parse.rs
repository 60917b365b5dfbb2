//! Unit tests for the CSV tokenizer and table parser.

use pulse_ingest::{parse_table, split_fields};
use pulse_model::ImportError;

#[test]
fn splits_plain_fields_and_trims() {
    let parsed = split_fields(" First Name , Last Name ,Email");
    assert_eq!(parsed, vec!["First Name", "Last Name", "Email"]);
}

#[test]
fn comma_inside_quotes_does_not_split() {
    let parsed = split_fields("\"Smith, John\",jsmith@example.com");
    assert_eq!(parsed, vec!["Smith, John", "jsmith@example.com"]);
}

#[test]
fn wrapping_quotes_are_stripped() {
    let parsed = split_fields("\"Email\",\"  padded  \"");
    assert_eq!(parsed, vec!["Email", "padded"]);
}

#[test]
fn unterminated_quote_runs_to_end_of_line() {
    let parsed = split_fields("\"Smith, John,extra");
    assert_eq!(parsed, vec!["Smith, John,extra"]);
}

#[test]
fn empty_line_yields_one_empty_field() {
    assert_eq!(split_fields(""), vec![""]);
    assert_eq!(split_fields(","), vec!["", ""]);
}

#[test]
fn parses_header_and_rows() {
    let table = parse_table("Name,Email\nSarah,sarah@email.com\nMarcus,marcus@email.com")
        .expect("parse table");
    assert_eq!(table.headers, vec!["Name", "Email"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(1, 0), Some("Marcus"));
}

#[test]
fn crlf_and_blank_lines_are_handled() {
    let table = parse_table("\r\nName,Email\r\n\r\nSarah,sarah@email.com\r\n").expect("parse table");
    assert_eq!(table.headers, vec!["Name", "Email"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.cell(0, 1), Some("sarah@email.com"));
}

#[test]
fn short_rows_are_kept_short() {
    let table = parse_table("A,B,C\nx,y").expect("parse table");
    assert_eq!(table.rows[0], vec!["x", "y"]);
    assert_eq!(table.cell(0, 2), None);
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_table(""), Err(ImportError::EmptyInput)));
    assert!(matches!(parse_table("\n\n"), Err(ImportError::EmptyInput)));
    assert!(matches!(parse_table("   \n \t \n"), Err(ImportError::EmptyInput)));
}

#[test]
fn empty_input_error_is_the_user_message() {
    let error = parse_table("\n\n").expect_err("empty input");
    assert_eq!(error.to_string(), "Could not parse CSV file");
}

#[test]
fn quoted_header_line_parses_like_data() {
    let table = parse_table("\"Full Name, Legal\",Email\nSarah Chen,sarah@email.com")
        .expect("parse table");
    assert_eq!(table.headers, vec!["Full Name, Legal", "Email"]);
}

mod properties {
    use proptest::prelude::{Strategy, prop, prop_assert, prop_assert_eq, proptest};

    use pulse_ingest::{parse_table, split_fields};

    fn csv_text() -> impl Strategy<Value = String> {
        prop::collection::vec("[ -~]{0,40}", 0..8).prop_map(|lines| lines.join("\n"))
    }

    proptest! {
        #[test]
        fn split_always_yields_at_least_one_field(line in "[ -~]{0,80}") {
            prop_assert!(!split_fields(&line).is_empty());
        }

        #[test]
        fn fields_are_trimmed_and_quote_free(line in "[ -~]{0,80}") {
            for field in split_fields(&line) {
                prop_assert_eq!(field.trim(), field.as_str());
                prop_assert!(!field.contains('"'));
            }
        }

        #[test]
        fn parse_never_panics_and_bounds_rows(text in csv_text()) {
            if let Ok(table) = parse_table(&text) {
                let line_count = text.lines().count();
                prop_assert!(table.row_count() < line_count.max(1));
                prop_assert!(!table.headers.is_empty());
            }
        }
    }
}

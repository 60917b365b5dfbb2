//! CSV text parsing.
//!
//! The tokenizer reproduces the intake dialog's behavior rather than strict
//! RFC 4180: every field is trimmed, quote characters are never stored, and
//! a field left unterminated by a closing quote runs to the end of the line.

use pulse_model::{ImportError, ParsedTable, Result};
use tracing::debug;

/// Splits one line into fields on commas, quote-aware.
///
/// A double quote toggles quoted mode; commas inside quotes are literal.
/// The quote characters themselves are consumed, and each finished field is
/// trimmed of surrounding whitespace.
#[must_use]
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Parses delimited text into a header row plus data rows.
///
/// Lines are split on `\n` or `\r\n` and blank lines are discarded before
/// anything else, so the header is the first non-blank line. Data rows keep
/// whatever width they parsed to; rows shorter than the header are padded
/// at projection time, not here.
///
/// # Errors
///
/// [`ImportError::EmptyInput`] when the text has no non-blank lines.
pub fn parse_table(text: &str) -> Result<ParsedTable> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());
    let Some(header_line) = lines.next() else {
        return Err(ImportError::EmptyInput);
    };
    let headers = split_fields(header_line);
    let rows: Vec<Vec<String>> = lines.map(split_fields).collect();
    debug!(columns = headers.len(), rows = rows.len(), "parsed csv text");
    Ok(ParsedTable::new(headers, rows))
}

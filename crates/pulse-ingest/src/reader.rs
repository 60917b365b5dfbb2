//! Import file reading.

use std::fs;
use std::path::Path;

use pulse_model::{ImportError, Result};
use tracing::debug;

/// Whether a file name carries the `.csv` extension the import accepts.
///
/// Literal suffix match, the same check the intake dialog applies before a
/// file is read. Content is not sniffed.
#[must_use]
pub fn is_csv_name(name: &str) -> bool {
    name.ends_with(".csv")
}

/// Rejects a non-CSV path before any read occurs.
///
/// # Errors
///
/// [`ImportError::UnsupportedFile`] when the file name fails [`is_csv_name`].
pub fn ensure_csv_path(path: &Path) -> Result<()> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if is_csv_name(name) {
        Ok(())
    } else {
        Err(ImportError::UnsupportedFile)
    }
}

/// Reads an import file's text, rejecting non-CSV paths before the read.
///
/// # Errors
///
/// [`ImportError::UnsupportedFile`] for a non-`.csv` path (checked before
/// the read) or [`ImportError::Io`] when the read fails.
pub fn read_import_text(path: &Path) -> Result<String> {
    ensure_csv_path(path)?;
    let text = fs::read_to_string(path)?;
    debug!(file = %path.display(), bytes = text.len(), "read import file");
    Ok(text)
}

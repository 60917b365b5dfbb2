use thiserror::Error;

/// Errors surfaced by the import pipeline.
///
/// The `Display` strings double as the user-facing messages shown on the
/// upload step, so they are worded for the end user rather than the log.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The selected file does not carry the `.csv` extension. Raised before
    /// any read of the file contents.
    #[error("Please upload a CSV file")]
    UnsupportedFile,
    /// The input text contained no non-blank lines, so there is no header
    /// row to work with.
    #[error("Could not parse CSV file")]
    EmptyInput,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;

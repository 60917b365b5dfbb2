use std::path::PathBuf;

/// Result of one `import` run, for the end-of-run summary.
#[derive(Debug)]
pub struct ImportOutcome {
    pub file_name: String,
    pub total_rows: usize,
    pub columns: usize,
    pub mapped: usize,
    pub skipped: usize,
    /// Records handed to the sink, or `None` for a dry run.
    pub committed: Option<usize>,
    pub output: Option<PathBuf>,
}

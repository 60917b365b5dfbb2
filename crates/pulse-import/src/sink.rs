//! The record-creation boundary.

use pulse_model::ProjectedRecord;

/// External collaborator that receives the committed records.
///
/// The commit gate performs no business validation before calling this:
/// whether a malformed email or a duplicate client is rejected belongs to
/// the implementation behind the trait. The returned `Result` is the
/// commit-outcome reporting hook; a sink may refuse the whole batch and the
/// session will surface that to its caller.
pub trait RecordSink {
    /// Creates client records from the projected batch.
    ///
    /// # Errors
    ///
    /// Implementation-defined; a batch the collaborator cannot accept.
    fn create_records(&mut self, records: &[ProjectedRecord]) -> anyhow::Result<()>;
}

/// Collects records in memory. Stands in for the future backend the same
/// way the mock data service does for the dashboard views.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub created: Vec<ProjectedRecord>,
}

impl InMemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordSink for InMemorySink {
    fn create_records(&mut self, records: &[ProjectedRecord]) -> anyhow::Result<()> {
        self.created.extend_from_slice(records);
        Ok(())
    }
}

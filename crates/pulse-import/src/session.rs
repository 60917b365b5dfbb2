//! Import session: the upload → map → preview wizard.

use pulse_ingest::{is_csv_name, parse_table};
use pulse_map::MappingState;
use pulse_model::{ClientField, ImportError, ParsedTable, ProjectedRecord};
use tracing::{debug, info};

use crate::project::{project, project_preview};
use crate::sink::RecordSink;

/// Wizard step. `Closed` is terminal: a closed session never changes again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportStep {
    #[default]
    Upload,
    Map,
    Preview,
    Closed,
}

impl ImportStep {
    /// Display name for the step indicator.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Map => "Map Columns",
            Self::Preview => "Preview",
            Self::Closed => "Closed",
        }
    }

    /// The visible wizard steps in order.
    #[must_use]
    pub fn all() -> &'static [ImportStep] {
        &[Self::Upload, Self::Map, Self::Preview]
    }
}

/// State for one upload-to-commit interaction.
///
/// Created when the import opens, discarded when it closes; nothing here is
/// persisted. The parsed table is never mutated after a successful file
/// selection, so every projection re-derives from it and the current
/// mapping.
#[derive(Debug, Default)]
pub struct ImportSession {
    step: ImportStep,
    file_name: Option<String>,
    table: Option<ParsedTable>,
    mapping: Option<MappingState>,
    error: Option<String>,
}

impl ImportSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> ImportStep {
        self.step
    }

    /// Current user-facing error message, if the last action failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    #[must_use]
    pub fn table(&self) -> Option<&ParsedTable> {
        self.table.as_ref()
    }

    #[must_use]
    pub fn mapping(&self) -> Option<&MappingState> {
        self.mapping.as_ref()
    }

    pub fn mapping_mut(&mut self) -> Option<&mut MappingState> {
        self.mapping.as_mut()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.step == ImportStep::Closed
    }

    /// Handles a file selection on the upload step.
    ///
    /// A wrong extension or unparseable content stores a user-facing message
    /// and stays on upload; success stores the table, seeds the mapping,
    /// clears the error, and advances to the map step. Returns whether the
    /// session advanced. There is no automatic retry; a failure requires a
    /// new selection.
    pub fn select_file(&mut self, name: &str, text: &str) -> bool {
        if self.step != ImportStep::Upload {
            return false;
        }
        if !is_csv_name(name) {
            self.error = Some(ImportError::UnsupportedFile.to_string());
            return false;
        }
        match parse_table(text) {
            Ok(table) => {
                let mapping = MappingState::seed(&table.headers);
                info!(
                    file = %name,
                    columns = table.column_count(),
                    rows = table.row_count(),
                    auto_mapped = mapping.mapped_count(),
                    "import file accepted"
                );
                self.file_name = Some(name.to_string());
                self.table = Some(table);
                self.mapping = Some(mapping);
                self.error = None;
                self.step = ImportStep::Map;
                true
            }
            Err(error) => {
                debug!(file = %name, %error, "import file rejected");
                self.error = Some(error.to_string());
                false
            }
        }
    }

    /// Assigns one column's target. No-op once the session is closed.
    pub fn set_mapping(&mut self, column: usize, target: ClientField) {
        if self.step == ImportStep::Closed {
            return;
        }
        if let Some(state) = self.mapping.as_mut() {
            state.set(column, target);
        }
    }

    /// Clears one column's target. No-op once the session is closed.
    pub fn clear_mapping(&mut self, column: usize) {
        if self.step == ImportStep::Closed {
            return;
        }
        if let Some(state) = self.mapping.as_mut() {
            state.unset(column);
        }
    }

    /// Whether the preview transition is currently available.
    #[must_use]
    pub fn can_preview(&self) -> bool {
        self.step == ImportStep::Map && self.mapping.as_ref().is_some_and(|m| !m.is_empty())
    }

    /// Advances map → preview. A no-op while no column is mapped; that is
    /// an unavailable affordance, not an error.
    pub fn request_preview(&mut self) -> bool {
        if self.can_preview() {
            self.step = ImportStep::Preview;
            true
        } else {
            false
        }
    }

    /// Returns preview → map.
    pub fn back(&mut self) -> bool {
        if self.step == ImportStep::Preview {
            self.step = ImportStep::Map;
            true
        } else {
            false
        }
    }

    /// Projects the preview slice (at most [`crate::PREVIEW_ROWS`] rows).
    #[must_use]
    pub fn preview(&self) -> Vec<ProjectedRecord> {
        match (&self.table, &self.mapping) {
            (Some(table), Some(state)) => project_preview(table, state.mapping()),
            _ => Vec::new(),
        }
    }

    /// Confirms the import: projects the full row set, hands it to the
    /// sink, then closes the session.
    ///
    /// Only reachable from the preview step; from any other step this is a
    /// no-op returning `Ok(None)`. On a sink error the session stays on
    /// preview so the caller can retry or cancel.
    ///
    /// # Errors
    ///
    /// Whatever the sink reports for a batch it refuses.
    pub fn confirm(&mut self, sink: &mut dyn RecordSink) -> anyhow::Result<Option<usize>> {
        if self.step != ImportStep::Preview {
            return Ok(None);
        }
        let records = match (&self.table, &self.mapping) {
            (Some(table), Some(state)) => project(table, state.mapping()),
            _ => Vec::new(),
        };
        let count = records.len();
        sink.create_records(&records)?;
        info!(records = count, "import committed");
        self.step = ImportStep::Closed;
        Ok(Some(count))
    }

    /// Cancels from any step, discarding all session state without side
    /// effects.
    pub fn cancel(&mut self) {
        *self = Self {
            step: ImportStep::Closed,
            file_name: None,
            table: None,
            mapping: None,
            error: None,
        };
    }
}

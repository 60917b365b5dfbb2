use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ClientField;

/// Association from source column index (0-based) to target field.
///
/// Indices absent from the mapping are skipped during projection. The
/// structure itself does not reject two columns claiming the same target
/// field; the presentation layer is expected to disable already-used
/// targets rather than erase competing assignments, so duplicates cannot
/// arise through normal use.
///
/// Serializes as a JSON object keyed by column index, which is the saved
/// mapping file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: BTreeMap<usize, ClientField>,
}

impl ColumnMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns a target to a column, replacing only that column's entry.
    pub fn set(&mut self, column: usize, target: ClientField) {
        self.entries.insert(column, target);
    }

    /// Removes a column's assignment, returning the target it held.
    pub fn unset(&mut self, column: usize) -> Option<ClientField> {
        self.entries.remove(&column)
    }

    /// The target a column maps to, if any.
    #[must_use]
    pub fn target(&self, column: usize) -> Option<ClientField> {
        self.entries.get(&column).copied()
    }

    /// Whether any column currently maps to the given target.
    #[must_use]
    pub fn is_target_used(&self, target: ClientField) -> bool {
        self.entries.values().any(|field| *field == target)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in column order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, ClientField)> + '_ {
        self.entries.iter().map(|(column, field)| (*column, *field))
    }

    /// Mapped targets in column order.
    pub fn targets(&self) -> impl Iterator<Item = ClientField> + '_ {
        self.entries.values().copied()
    }

    /// Largest mapped column index, if any column is mapped.
    #[must_use]
    pub fn max_column(&self) -> Option<usize> {
        self.entries.keys().next_back().copied()
    }
}

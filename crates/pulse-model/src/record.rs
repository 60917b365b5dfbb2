use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ClientField;

/// One schema-shaped row produced by applying a column mapping to a raw
/// parsed row.
///
/// Fields without a mapped source column are absent, not empty: a renderer
/// has to supply its own placeholder for missing keys, and the
/// record-creation service sees only the fields the user actually mapped.
/// Serializes as a JSON object keyed by wire field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectedRecord {
    fields: BTreeMap<ClientField, String>,
}

impl ProjectedRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ClientField, value: String) {
        self.fields.insert(field, value);
    }

    #[must_use]
    pub fn get(&self, field: ClientField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: ClientField) -> bool {
        self.fields.contains_key(&field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Populated fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (ClientField, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

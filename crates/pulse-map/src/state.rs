//! Mutable mapping state for one import.

use pulse_model::{ClientField, ColumnMapping};

use crate::classify::seed_mapping;

/// Column-to-field assignments for one import: seeded by the classifier,
/// then adjusted by the user any number of times.
///
/// `set` replaces only its own column's entry and performs no
/// duplicate-target validation. The presentation layer is responsible for
/// disabling targets that are already claimed ([`Self::is_target_used`],
/// [`Self::available_targets`]) rather than erasing competing assignments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingState {
    headers: Vec<String>,
    mapping: ColumnMapping,
}

impl MappingState {
    /// Seeds state from parsed headers via the classifier.
    #[must_use]
    pub fn seed(headers: &[String]) -> Self {
        Self {
            headers: headers.to_vec(),
            mapping: seed_mapping(headers),
        }
    }

    /// Restores state from a previously saved mapping.
    #[must_use]
    pub fn with_mapping(headers: &[String], mapping: ColumnMapping) -> Self {
        Self {
            headers: headers.to_vec(),
            mapping,
        }
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Assigns a target to a column.
    pub fn set(&mut self, column: usize, target: ClientField) {
        self.mapping.set(column, target);
    }

    /// Clears a column's assignment, returning the target it held.
    pub fn unset(&mut self, column: usize) -> Option<ClientField> {
        self.mapping.unset(column)
    }

    /// Replaces the whole mapping, e.g. with one loaded from a saved file.
    pub fn replace(&mut self, mapping: ColumnMapping) {
        self.mapping = mapping;
    }

    #[must_use]
    pub fn target(&self, column: usize) -> Option<ClientField> {
        self.mapping.target(column)
    }

    #[must_use]
    pub fn is_target_used(&self, target: ClientField) -> bool {
        self.mapping.is_target_used(target)
    }

    /// Targets no column has claimed yet, in schema order.
    #[must_use]
    pub fn available_targets(&self) -> Vec<ClientField> {
        ClientField::ALL
            .into_iter()
            .filter(|field| !self.mapping.is_target_used(*field))
            .collect()
    }

    /// Resolves a user-facing column reference: a 0-based index, or a
    /// header name matched case-insensitively (leftmost match wins).
    #[must_use]
    pub fn resolve_column(&self, reference: &str) -> Option<usize> {
        let reference = reference.trim();
        if let Ok(index) = reference.parse::<usize>() {
            return (index < self.headers.len()).then_some(index);
        }
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(reference))
    }

    #[must_use]
    pub fn mapped_count(&self) -> usize {
        self.mapping.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

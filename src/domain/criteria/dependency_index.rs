//! Dependency Index - bidirectional map between input fields and criteria.

use std::collections::HashMap;

use super::Criterion;
use crate::domain::foundation::{CriterionId, FieldKey};

/// Derived, read-only lookup tables built once from the registry.
///
/// `input_to_criteria` and `criteria_to_inputs` are exact inverses of each
/// other and of every criterion's `input_keys`. Order within each list is
/// registry iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    input_to_criteria: HashMap<FieldKey, Vec<CriterionId>>,
    criteria_to_inputs: HashMap<CriterionId, Vec<FieldKey>>,
}

impl DependencyIndex {
    /// Builds both maps in a single pass over `criteria`.
    ///
    /// # Edge Cases
    /// - A field no criterion reads has no entry (see [`Self::criteria_for`])
    /// - A criterion listing the same field twice appears once per listing
    pub fn build<'a>(criteria: impl IntoIterator<Item = &'a Criterion>) -> Self {
        let mut index = Self::default();

        for criterion in criteria {
            for key in &criterion.input_keys {
                index
                    .input_to_criteria
                    .entry(*key)
                    .or_default()
                    .push(criterion.id);
                index
                    .criteria_to_inputs
                    .entry(criterion.id)
                    .or_default()
                    .push(*key);
            }
        }

        index
    }

    /// Criteria affected by a change to `key`. Missing entries are empty.
    pub fn criteria_for(&self, key: FieldKey) -> &[CriterionId] {
        self.input_to_criteria
            .get(&key)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Input fields read by criterion `id`. Unknown IDs yield an empty slice.
    pub fn inputs_for(&self, id: CriterionId) -> &[FieldKey] {
        self.criteria_to_inputs
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fields that at least one criterion reads.
    pub fn indexed_fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.input_to_criteria.keys().copied()
    }

    /// Criteria that read at least one field.
    pub fn indexed_criteria(&self) -> impl Iterator<Item = CriterionId> + '_ {
        self.criteria_to_inputs.keys().copied()
    }
}

//! CriteriaState - latest evaluation result per criterion.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::evaluation::EvaluationResult;
use crate::domain::foundation::{CriterionId, CriterionStatus};

/// Map of criterion ID to its latest result.
///
/// Owned by the caller and replaced, never mutated, by the orchestrator.
/// Entries are shared between successive states, so an entry that was not
/// re-evaluated stays pointer-equal to its predecessor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaState {
    entries: BTreeMap<CriterionId, Arc<EvaluationResult>>,
}

impl CriteriaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: CriterionId) -> Option<&EvaluationResult> {
        self.entries.get(&id).map(Arc::as_ref)
    }

    /// Shared handle to the entry for `id`, for identity comparisons.
    pub fn shared(&self, id: CriterionId) -> Option<&Arc<EvaluationResult>> {
        self.entries.get(&id)
    }

    pub fn status_of(&self, id: CriterionId) -> Option<CriterionStatus> {
        self.get(id).map(|result| result.status)
    }

    /// Entries in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (CriterionId, &EvaluationResult)> + '_ {
        self.entries.iter().map(|(id, result)| (*id, result.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// IDs whose entry is not the same shared result as in `previous`.
    pub fn changed_since(&self, previous: &CriteriaState) -> Vec<CriterionId> {
        self.entries
            .iter()
            .filter(|(id, result)| {
                previous
                    .entries
                    .get(id)
                    .map_or(true, |before| !Arc::ptr_eq(before, result))
            })
            .map(|(id, _)| *id)
            .collect()
    }

    pub(crate) fn insert(&mut self, id: CriterionId, result: EvaluationResult) {
        self.entries.insert(id, Arc::new(result));
    }
}

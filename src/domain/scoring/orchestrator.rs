//! Evaluation Orchestrator - turns field changes into new criteria states.

use tracing::debug;

use super::{CriteriaEngine, CriteriaState};
use crate::domain::foundation::{FieldKey, FieldValue};
use crate::ports::ContentSnapshot;

/// Snapshot view in which one field reads the value being committed.
struct ChangedField<'a> {
    key: FieldKey,
    value: Option<&'a FieldValue>,
    inner: &'a dyn ContentSnapshot,
}

impl ContentSnapshot for ChangedField<'_> {
    fn get_value(&self, key: FieldKey) -> Option<&FieldValue> {
        if key == self.key {
            self.value
        } else {
            self.inner.get_value(key)
        }
    }
}

impl CriteriaEngine {
    /// Re-evaluates the criteria that read `key` and returns the new state.
    ///
    /// `value` is the committed value of `key` and takes precedence over the
    /// snapshot's copy; `None` means the field was cleared. Entries of
    /// criteria that do not read `key` are carried over unchanged, and
    /// `state` itself is never modified.
    pub fn evaluate_field(
        &self,
        key: FieldKey,
        value: Option<&FieldValue>,
        snapshot: &dyn ContentSnapshot,
        state: &CriteriaState,
    ) -> CriteriaState {
        let affected = self.registry().criteria_for(key);
        if affected.is_empty() {
            return state.clone();
        }

        let view = ChangedField {
            key,
            value,
            inner: snapshot,
        };
        let mut next = state.clone();
        for &id in affected {
            if let Some(result) = self.evaluate_criterion(id, value, &view) {
                next.insert(id, result);
            }
        }

        debug!(field = %key, criteria = affected.len(), "field re-evaluated");
        next
    }

    /// Evaluates every criterion in registry order into a fresh state.
    pub fn evaluate_all(&self, snapshot: &dyn ContentSnapshot) -> CriteriaState {
        let mut state = CriteriaState::new();
        for criterion in self.registry().criteria() {
            if let Some(result) = self.evaluate_criterion(criterion.id, None, snapshot) {
                state.insert(criterion.id, result);
            }
        }

        debug!(criteria = state.len(), "all criteria evaluated");
        state
    }
}

//! Evaluation Function Table - criterion ID → pure evaluation function.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use super::{rules, EvaluationResult};
use crate::domain::criteria::{CriteriaRegistry, Criterion};
use crate::domain::foundation::{CriterionId, CriterionStatus, FieldValue, RegistryError};
use crate::ports::ContentSnapshot;

/// A pure rule: `(changed value, snapshot) → status`.
///
/// Returns `Pending` when any input is missing or blank. The changed value may
/// be `None` during a full pass; rules read their inputs from the snapshot.
pub type EvaluationFn = fn(Option<&FieldValue>, &dyn ContentSnapshot) -> CriterionStatus;

/// Lookup table of evaluation functions.
#[derive(Clone, Default)]
pub struct EvaluationTable {
    functions: HashMap<CriterionId, EvaluationFn>,
}

impl fmt::Debug for EvaluationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.functions.keys().collect();
        ids.sort();
        f.debug_struct("EvaluationTable").field("criteria", &ids).finish()
    }
}

impl EvaluationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The functions for the standard catalogue.
    pub fn standard() -> Self {
        rules::standard_table()
    }

    /// Registers `function` for `id`, returning any function it replaced.
    pub fn register(&mut self, id: CriterionId, function: EvaluationFn) -> Option<EvaluationFn> {
        self.functions.insert(id, function)
    }

    /// Builder form of [`Self::register`].
    pub fn with(mut self, id: u16, function: EvaluationFn) -> Self {
        self.register(CriterionId::new(id), function);
        self
    }

    pub fn contains(&self, id: CriterionId) -> bool {
        self.functions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Evaluates `criterion`.
    ///
    /// A criterion without a registered function yields an error result
    /// instead of failing, so one misconfigured rule cannot abort a pass.
    pub fn evaluate(
        &self,
        criterion: &Criterion,
        changed: Option<&FieldValue>,
        snapshot: &dyn ContentSnapshot,
    ) -> EvaluationResult {
        match self.functions.get(&criterion.id) {
            Some(function) => EvaluationResult::for_status(criterion, function(changed, snapshot)),
            None => {
                warn!(criterion = %criterion.id, "no evaluation function registered");
                EvaluationResult::unregistered()
            }
        }
    }

    /// Checks that every registry criterion has a function.
    pub fn verify(&self, registry: &CriteriaRegistry) -> Result<(), RegistryError> {
        match registry.criteria().find(|c| !self.contains(c.id)) {
            Some(criterion) => Err(RegistryError::MissingEvaluator(criterion.id)),
            None => Ok(()),
        }
    }
}

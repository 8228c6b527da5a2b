//! Improvement Function Table - criterion ID → pure improvement function.

use std::collections::HashMap;
use std::fmt;

use super::{rules, Suggestion};
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{CriterionId, FieldValue, ImprovementError, RegistryError};
use crate::ports::ContentSnapshot;

/// A pure fixer: `(current value, snapshot) → suggestion`.
///
/// Returns `None` when inputs are missing or no automatic fix exists.
pub type ImprovementFn = fn(Option<&FieldValue>, &dyn ContentSnapshot) -> Option<Suggestion>;

/// Lookup table of improvement functions, one per optimizable criterion.
#[derive(Clone, Default)]
pub struct ImprovementTable {
    functions: HashMap<CriterionId, ImprovementFn>,
}

impl fmt::Debug for ImprovementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.functions.keys().collect();
        ids.sort();
        f.debug_struct("ImprovementTable").field("criteria", &ids).finish()
    }
}

impl ImprovementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The functions for the standard catalogue.
    pub fn standard() -> Self {
        rules::standard_table()
    }

    pub fn register(&mut self, id: CriterionId, function: ImprovementFn) -> Option<ImprovementFn> {
        self.functions.insert(id, function)
    }

    pub fn with(mut self, id: u16, function: ImprovementFn) -> Self {
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

    /// Runs the improvement function for `id`.
    ///
    /// Fails for unknown or non-optimizable criteria instead of returning
    /// nothing, so callers cannot mistake misuse for "no fix available".
    pub fn improve(
        &self,
        registry: &CriteriaRegistry,
        id: CriterionId,
        current: Option<&FieldValue>,
        snapshot: &dyn ContentSnapshot,
    ) -> Result<Option<Suggestion>, ImprovementError> {
        let criterion = registry
            .get(id)
            .ok_or(ImprovementError::UnknownCriterion(id))?;
        if !criterion.optimizable {
            return Err(ImprovementError::NotOptimizable(id));
        }
        let function = self
            .functions
            .get(&id)
            .ok_or(ImprovementError::MissingImprover(id))?;
        Ok(function(current, snapshot))
    }

    /// Checks that exactly the optimizable criteria have functions.
    pub fn verify(&self, registry: &CriteriaRegistry) -> Result<(), RegistryError> {
        if let Some(criterion) = registry
            .criteria()
            .find(|c| c.optimizable && !self.contains(c.id))
        {
            return Err(RegistryError::MissingImprover(criterion.id));
        }

        let mut ids: Vec<_> = self.functions.keys().copied().collect();
        ids.sort();
        let unexpected = ids
            .into_iter()
            .find(|id| !registry.get(*id).is_some_and(|c| c.optimizable));
        match unexpected {
            Some(id) => Err(RegistryError::UnexpectedImprover(id)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ContentFields;
    use crate::domain::criteria::{CriteriaSection, Criterion};
    use crate::domain::foundation::FieldKey;

    fn fixed(_: Option<&FieldValue>, _: &dyn ContentSnapshot) -> Option<Suggestion> {
        Some(Suggestion::replace("fixed"))
    }

    fn registry() -> CriteriaRegistry {
        CriteriaRegistry::new(vec![CriteriaSection::new(
            "meta",
            vec![
                Criterion::binary(1, "meta", "fixable", 2, &[FieldKey::Title]).optimizable(),
                Criterion::binary(2, "meta", "manual", 2, &[FieldKey::Title]),
            ],
        )])
        .unwrap()
    }

    #[test]
    fn improve_runs_registered_function() {
        let table = ImprovementTable::new().with(1, fixed);
        let result = table.improve(&registry(), CriterionId::new(1), None, &ContentFields::new());
        assert_eq!(result, Ok(Some(Suggestion::replace("fixed"))));
    }

    #[test]
    fn improve_rejects_non_optimizable_criterion() {
        let table = ImprovementTable::new().with(1, fixed);
        let result = table.improve(&registry(), CriterionId::new(2), None, &ContentFields::new());
        assert_eq!(result, Err(ImprovementError::NotOptimizable(CriterionId::new(2))));
    }

    #[test]
    fn improve_rejects_unknown_criterion() {
        let table = ImprovementTable::new();
        let result = table.improve(&registry(), CriterionId::new(9), None, &ContentFields::new());
        assert_eq!(result, Err(ImprovementError::UnknownCriterion(CriterionId::new(9))));
    }

    #[test]
    fn improve_reports_missing_function() {
        let table = ImprovementTable::new();
        let result = table.improve(&registry(), CriterionId::new(1), None, &ContentFields::new());
        assert_eq!(result, Err(ImprovementError::MissingImprover(CriterionId::new(1))));
    }

    #[test]
    fn verify_flags_missing_and_unexpected_functions() {
        assert_eq!(
            ImprovementTable::new().verify(&registry()),
            Err(RegistryError::MissingImprover(CriterionId::new(1)))
        );
        assert_eq!(
            ImprovementTable::new().with(1, fixed).with(2, fixed).verify(&registry()),
            Err(RegistryError::UnexpectedImprover(CriterionId::new(2)))
        );
        assert!(ImprovementTable::new().with(1, fixed).verify(&registry()).is_ok());
    }

    #[test]
    fn standard_table_matches_optimizable_flags() {
        let registry = CriteriaRegistry::standard().unwrap();
        assert!(ImprovementTable::standard().verify(&registry).is_ok());
        assert_eq!(ImprovementTable::standard().len(), 9);
    }
}

//! CriteriaEngine - registry plus function tables, checked once at startup.

use tracing::{debug, info};

use super::{CriteriaState, ScoreAggregator, ScoreSummary, SectionScore};
use crate::domain::criteria::{CriteriaRegistry, DEFAULT_WARNING_RATIO};
use crate::domain::evaluation::{EvaluationResult, EvaluationTable};
use crate::domain::foundation::{CriterionId, FieldValue, ImprovementError, RegistryError};
use crate::domain::improvement::{ImprovementTable, Suggestion};
use crate::ports::ContentSnapshot;

/// Stateless evaluator over an immutable registry.
///
/// The engine holds no criteria state of its own; callers pass a
/// [`CriteriaState`] in and keep the one returned.
#[derive(Debug, Clone)]
pub struct CriteriaEngine {
    registry: CriteriaRegistry,
    evaluators: EvaluationTable,
    improvers: ImprovementTable,
}

impl CriteriaEngine {
    /// Builds an engine and verifies that every criterion has an evaluation
    /// function and that improvement functions exist exactly for the
    /// optimizable criteria.
    pub fn new(
        registry: CriteriaRegistry,
        evaluators: EvaluationTable,
        improvers: ImprovementTable,
    ) -> Result<Self, RegistryError> {
        evaluators.verify(&registry)?;
        improvers.verify(&registry)?;
        info!(
            criteria = registry.len(),
            max_score = registry.max_score(),
            "criteria engine ready"
        );
        Ok(Self::unchecked(registry, evaluators, improvers))
    }

    /// Builds an engine without table verification. Criteria lacking an
    /// evaluation function report an error result when evaluated.
    pub fn unchecked(
        registry: CriteriaRegistry,
        evaluators: EvaluationTable,
        improvers: ImprovementTable,
    ) -> Self {
        Self {
            registry,
            evaluators,
            improvers,
        }
    }

    /// The standard catalogue with the default warning ratio.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::with_options(DEFAULT_WARNING_RATIO, true)
    }

    /// The standard catalogue with a custom warning ratio, verified when
    /// `strict` is set.
    pub fn with_options(warning_ratio: f64, strict: bool) -> Result<Self, RegistryError> {
        let registry = CriteriaRegistry::standard_with_warning_ratio(warning_ratio)?;
        let evaluators = EvaluationTable::standard();
        let improvers = ImprovementTable::standard();
        if strict {
            Self::new(registry, evaluators, improvers)
        } else {
            debug!("table verification disabled");
            Ok(Self::unchecked(registry, evaluators, improvers))
        }
    }

    pub fn registry(&self) -> &CriteriaRegistry {
        &self.registry
    }

    /// Evaluates a single criterion against `snapshot`.
    ///
    /// Returns `None` for IDs outside the registry.
    pub fn evaluate_criterion(
        &self,
        id: CriterionId,
        changed: Option<&FieldValue>,
        snapshot: &dyn ContentSnapshot,
    ) -> Option<EvaluationResult> {
        let criterion = self.registry.get(id)?;
        Some(self.evaluators.evaluate(criterion, changed, snapshot))
    }

    /// Suggests a fix for an optimizable criterion.
    pub fn improve(
        &self,
        id: CriterionId,
        current: Option<&FieldValue>,
        snapshot: &dyn ContentSnapshot,
    ) -> Result<Option<Suggestion>, ImprovementError> {
        self.improvers.improve(&self.registry, id, current, snapshot)
    }

    pub fn summarize(&self, state: &CriteriaState) -> ScoreSummary {
        ScoreAggregator::summarize(&self.registry, state)
    }

    pub fn section_scores(&self, state: &CriteriaState) -> Vec<SectionScore> {
        ScoreAggregator::section_scores(&self.registry, state)
    }

    /// Optimizable criteria currently in warning or error, in registry order.
    pub fn fixable(&self, state: &CriteriaState) -> Vec<CriterionId> {
        self.registry
            .criteria()
            .filter(|criterion| criterion.optimizable)
            .filter(|criterion| {
                state
                    .status_of(criterion.id)
                    .is_some_and(|status| status.needs_work())
            })
            .map(|criterion| criterion.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ContentFields;
    use crate::domain::criteria::{CriteriaSection, Criterion};
    use crate::domain::foundation::{CriterionStatus, FieldKey};

    fn engine() -> CriteriaEngine {
        CriteriaEngine::standard().unwrap()
    }

    #[test]
    fn standard_engine_verifies() {
        assert_eq!(engine().registry().len(), 21);
    }

    #[test]
    fn strict_engine_rejects_missing_evaluator() {
        let registry = CriteriaRegistry::new(vec![CriteriaSection::new(
            "core",
            vec![Criterion::binary(1, "core", "orphan", 2, &[FieldKey::Title])],
        )])
        .unwrap();
        let result = CriteriaEngine::new(registry, EvaluationTable::new(), ImprovementTable::new());
        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingEvaluator(CriterionId::new(1))
        );
    }

    #[test]
    fn unchecked_engine_reports_missing_evaluator_as_error() {
        let registry = CriteriaRegistry::new(vec![CriteriaSection::new(
            "core",
            vec![Criterion::binary(1, "core", "orphan", 2, &[FieldKey::Title])],
        )])
        .unwrap();
        let engine =
            CriteriaEngine::unchecked(registry, EvaluationTable::new(), ImprovementTable::new());
        let result = engine
            .evaluate_criterion(CriterionId::new(1), None, &ContentFields::new())
            .unwrap();
        assert_eq!(result, EvaluationResult::unregistered());
    }

    #[test]
    fn custom_ratio_changes_default_warning_scores() {
        let engine = CriteriaEngine::with_options(0.5, true).unwrap();
        let density = engine.registry().get(CriterionId::new(105)).unwrap();
        assert_eq!(density.warning_score, Some(4));
    }

    #[test]
    fn invalid_ratio_is_rejected() {
        assert!(matches!(
            CriteriaEngine::with_options(1.5, true),
            Err(RegistryError::InvalidWarningRatio(_))
        ));
    }

    #[test]
    fn evaluate_criterion_ignores_unknown_ids() {
        assert!(engine()
            .evaluate_criterion(CriterionId::new(999), None, &ContentFields::new())
            .is_none());
    }

    #[test]
    fn fixable_lists_failing_optimizable_criteria() {
        let engine = engine();
        let fields = ContentFields::new()
            .with(FieldKey::PrimaryKeyword, "coffee")
            .with(FieldKey::MetaTitle, "Tea")
            .with(FieldKey::Content, "<p>coffee</p>");
        let state = engine.evaluate_all(&fields);

        assert_eq!(state.status_of(CriterionId::new(104)), Some(CriterionStatus::Success));
        let fixable = engine.fixable(&state);
        assert!(fixable.contains(&CriterionId::new(101)));
        assert!(fixable.contains(&CriterionId::new(201)));
        assert!(!fixable.contains(&CriterionId::new(106)));
    }

    #[test]
    fn improve_goes_through_registry_checks() {
        let engine = engine();
        let fields = ContentFields::new();
        assert_eq!(
            engine.improve(CriterionId::new(106), None, &fields),
            Err(ImprovementError::NotOptimizable(CriterionId::new(106)))
        );
        assert_eq!(engine.improve(CriterionId::new(101), None, &fields), Ok(None));
    }
}

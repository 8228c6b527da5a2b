//! Criteria Registry - immutable catalogue of scoring criteria.

use std::collections::HashMap;

use tracing::debug;

use super::criterion::{default_warning_score, DEFAULT_WARNING_RATIO};
use super::{catalogue, CriteriaSection, Criterion, DependencyIndex};
use crate::domain::foundation::{CriterionId, FieldKey, RegistryError};

/// Ordered sections of criteria plus the derived dependency index.
///
/// Built once and never mutated. Construction fails on duplicate IDs,
/// ternary criteria without a warning message, and warning scores outside
/// `(0, weight)`.
#[derive(Debug, Clone)]
pub struct CriteriaRegistry {
    sections: Vec<CriteriaSection>,
    positions: HashMap<CriterionId, (usize, usize)>,
    index: DependencyIndex,
    max_score: u32,
}

impl CriteriaRegistry {
    /// Builds a registry using the default 70% warning ratio.
    pub fn new(sections: Vec<CriteriaSection>) -> Result<Self, RegistryError> {
        Self::with_warning_ratio(sections, DEFAULT_WARNING_RATIO)
    }

    /// Builds a registry, resolving undeclared ternary warning scores as
    /// `round(weight × ratio)`.
    pub fn with_warning_ratio(
        mut sections: Vec<CriteriaSection>,
        ratio: f64,
    ) -> Result<Self, RegistryError> {
        if !(ratio > 0.0 && ratio < 1.0) {
            return Err(RegistryError::InvalidWarningRatio(ratio));
        }

        let mut positions = HashMap::new();

        for (section_idx, section) in sections.iter_mut().enumerate() {
            for (criterion_idx, criterion) in section.criteria.iter_mut().enumerate() {
                validate(criterion)?;

                if criterion.is_ternary() {
                    let weight = criterion.weight;
                    let warning_score = *criterion
                        .warning_score
                        .get_or_insert_with(|| default_warning_score(weight, ratio));
                    if warning_score == 0 || warning_score >= criterion.weight {
                        return Err(RegistryError::InvalidWarningScore {
                            id: criterion.id,
                            warning_score,
                            weight: criterion.weight,
                        });
                    }
                }

                if positions
                    .insert(criterion.id, (section_idx, criterion_idx))
                    .is_some()
                {
                    return Err(RegistryError::DuplicateCriterionId(criterion.id));
                }
            }
        }

        let index = DependencyIndex::build(sections.iter().flat_map(|s| s.criteria.iter()));
        let max_score = sections.iter().map(CriteriaSection::max_score).sum();

        debug!(
            criteria = positions.len(),
            sections = sections.len(),
            max_score,
            "criteria registry built"
        );

        Ok(Self {
            sections,
            positions,
            index,
            max_score,
        })
    }

    /// Builds the standard SEO catalogue.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(catalogue::standard_sections())
    }

    /// Builds the standard SEO catalogue with a custom warning ratio.
    pub fn standard_with_warning_ratio(ratio: f64) -> Result<Self, RegistryError> {
        Self::with_warning_ratio(catalogue::standard_sections(), ratio)
    }

    pub fn sections(&self) -> &[CriteriaSection] {
        &self.sections
    }

    /// All criteria in registry order.
    pub fn criteria(&self) -> impl Iterator<Item = &Criterion> + '_ {
        self.sections.iter().flat_map(|section| section.criteria.iter())
    }

    pub fn get(&self, id: CriterionId) -> Option<&Criterion> {
        self.positions
            .get(&id)
            .map(|&(section, criterion)| &self.sections[section].criteria[criterion])
    }

    /// Section containing criterion `id`.
    pub fn section_of(&self, id: CriterionId) -> Option<&CriteriaSection> {
        self.positions
            .get(&id)
            .map(|&(section, _)| &self.sections[section])
    }

    pub fn contains(&self, id: CriterionId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Sum of all criterion weights.
    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn index(&self) -> &DependencyIndex {
        &self.index
    }

    /// Criteria affected by a change to `key`, in registry order.
    pub fn criteria_for(&self, key: FieldKey) -> &[CriterionId] {
        self.index.criteria_for(key)
    }
}

fn validate(criterion: &Criterion) -> Result<(), RegistryError> {
    if criterion.weight == 0 {
        return Err(RegistryError::ZeroWeight(criterion.id));
    }
    if criterion.input_keys.is_empty() {
        return Err(RegistryError::NoInputKeys(criterion.id));
    }
    if criterion.is_ternary() && criterion.messages.warning.is_none() {
        return Err(RegistryError::MissingWarningMessage(criterion.id));
    }
    Ok(())
}

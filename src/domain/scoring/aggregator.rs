//! Score Aggregator - totals, percentage and overall status of a state.
//!
//! Like the analysis calculators, this is a stateless unit struct: every
//! figure is recomputed from the state on demand, never cached.

use serde::{Deserialize, Serialize};

use super::CriteriaState;
use crate::domain::criteria::CriteriaRegistry;
use crate::domain::foundation::{CriterionStatus, Percentage, SectionId};

/// Aggregate figures for a whole state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub total_score: u32,
    pub max_score: u32,
    pub percentage: Percentage,
    pub overall_status: CriterionStatus,
}

/// Aggregate figures for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScore {
    pub section_id: SectionId,
    pub title: String,
    pub score: u32,
    pub max_score: u32,
    pub status: CriterionStatus,
}

/// Computes scores from a criteria state.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Sum of the scores of all present entries.
    pub fn total_score(state: &CriteriaState) -> u32 {
        state.iter().map(|(_, result)| result.score).sum()
    }

    /// `round(total / max × 100)`.
    pub fn percentage(total_score: u32, max_score: u32) -> Percentage {
        Percentage::from_ratio(total_score, max_score)
    }

    /// Most severe status in `state`, ordered error > warning > success > pending.
    ///
    /// An empty state, or one whose entries are all pending, is pending.
    pub fn overall_status(state: &CriteriaState) -> CriterionStatus {
        state
            .iter()
            .map(|(_, result)| result.status)
            .fold(CriterionStatus::Pending, CriterionStatus::worst)
    }

    pub fn summarize(registry: &CriteriaRegistry, state: &CriteriaState) -> ScoreSummary {
        let total_score = Self::total_score(state);
        let max_score = registry.max_score();
        ScoreSummary {
            total_score,
            max_score,
            percentage: Self::percentage(total_score, max_score),
            overall_status: Self::overall_status(state),
        }
    }

    /// Per-section figures in registry order.
    ///
    /// A section status follows the same ordering as the overall status and
    /// is pending until one of its criteria has data.
    pub fn section_scores(registry: &CriteriaRegistry, state: &CriteriaState) -> Vec<SectionScore> {
        registry
            .sections()
            .iter()
            .map(|section| {
                let results: Vec<_> = section
                    .criteria
                    .iter()
                    .filter_map(|criterion| state.get(criterion.id))
                    .collect();
                let status = results
                    .iter()
                    .map(|result| result.status)
                    .fold(CriterionStatus::Pending, CriterionStatus::worst);
                SectionScore {
                    section_id: section.id.clone(),
                    title: section.title.clone(),
                    score: results.iter().map(|result| result.score).sum(),
                    max_score: section.max_score(),
                    status,
                }
            })
            .collect()
    }
}

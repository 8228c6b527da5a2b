//! EvaluationResult - the latest outcome recorded for one criterion.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::criteria::Criterion;
use crate::domain::foundation::CriterionStatus;

/// Message key reported while a criterion lacks input data.
pub const PENDING_MESSAGE: &str = "seo.criteria.pending";

/// Message reported when a registered criterion has no evaluation function.
pub const NO_EVALUATOR_MESSAGE: &str = "no evaluator registered";

/// Status, message key and score of one criterion.
///
/// Results built through [`EvaluationResult::for_status`] keep
/// `score = weight` iff success, `score = warning score` iff warning, and
/// `score = 0` for error and pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub status: CriterionStatus,
    pub message: String,
    pub score: u32,
}

impl EvaluationResult {
    /// Builds the result for `status` from the criterion's weights and keys.
    ///
    /// A binary criterion cannot warn; a warning reported for one is recorded
    /// as an error.
    pub fn for_status(criterion: &Criterion, status: CriterionStatus) -> Self {
        let status = if status == CriterionStatus::Warning && !criterion.is_ternary() {
            warn!(
                criterion = %criterion.id,
                "binary criterion reported a warning; recording it as an error"
            );
            CriterionStatus::Error
        } else {
            status
        };

        let message = criterion
            .message_for(status)
            .unwrap_or(PENDING_MESSAGE)
            .to_string();

        Self {
            status,
            message,
            score: criterion.score_for(status),
        }
    }

    /// Result for a criterion whose inputs are missing.
    pub fn pending() -> Self {
        Self {
            status: CriterionStatus::Pending,
            message: PENDING_MESSAGE.to_string(),
            score: 0,
        }
    }

    /// Result for a criterion with no evaluation function.
    pub fn unregistered() -> Self {
        Self {
            status: CriterionStatus::Error,
            message: NO_EVALUATOR_MESSAGE.to_string(),
            score: 0,
        }
    }
}

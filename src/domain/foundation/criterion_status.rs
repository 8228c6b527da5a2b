//! CriterionStatus enum for the outcome of one criterion evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating a criterion.
///
/// Variants are declared in ascending severity, so `Ord` gives the
/// aggregation order `pending < success < warning < error`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum CriterionStatus {
    #[default]
    Pending,
    Success,
    Warning,
    Error,
}

impl CriterionStatus {
    /// Returns true if data is present but falls short of full marks.
    pub fn needs_work(&self) -> bool {
        matches!(self, CriterionStatus::Warning | CriterionStatus::Error)
    }

    /// Returns the more severe of two statuses.
    pub fn worst(self, other: CriterionStatus) -> CriterionStatus {
        self.max(other)
    }
}

impl fmt::Display for CriterionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CriterionStatus::Pending => "Pending",
            CriterionStatus::Success => "Success",
            CriterionStatus::Warning => "Warning",
            CriterionStatus::Error => "Error",
        };
        write!(f, "{}", s)
    }
}

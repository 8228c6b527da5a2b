//! Criterion - a named, weighted scoring rule.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, CriterionStatus, FieldKey};

/// Fallback share of the weight awarded on a warning outcome.
pub const DEFAULT_WARNING_RATIO: f64 = 0.7;

/// Outcome space of a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusType {
    /// success | error
    Binary,
    /// success | warning | error
    Ternary,
}

/// Message keys reported for each outcome of a criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessages {
    pub success: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub error: String,
}

impl StatusMessages {
    /// Derives `success` and `error` keys from a base key.
    pub fn binary(base: &str) -> Self {
        Self {
            success: format!("{base}.success"),
            warning: None,
            error: format!("{base}.error"),
        }
    }

    /// Derives `success`, `warning` and `error` keys from a base key.
    pub fn ternary(base: &str) -> Self {
        Self {
            warning: Some(format!("{base}.warning")),
            ..Self::binary(base)
        }
    }
}

/// A scoring rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    /// Opaque localization key.
    pub description: String,
    /// Maximum score this criterion contributes.
    pub weight: u32,
    pub status_type: StatusType,
    pub messages: StatusMessages,
    /// Fields read from the snapshot, primary field first.
    pub input_keys: Vec<FieldKey>,
    /// Score on a warning outcome. Filled in by the registry for ternary
    /// criteria that do not declare one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_score: Option<u32>,
    pub optimizable: bool,
}

impl Criterion {
    /// Creates a binary criterion with message keys under
    /// `seo.criteria.<section>.<slug>`.
    pub fn binary(
        id: u16,
        section: &str,
        slug: &str,
        weight: u32,
        input_keys: &[FieldKey],
    ) -> Self {
        let base = format!("seo.criteria.{section}.{slug}");
        Self {
            id: CriterionId::new(id),
            description: format!("{base}.description"),
            weight,
            status_type: StatusType::Binary,
            messages: StatusMessages::binary(&base),
            input_keys: input_keys.to_vec(),
            warning_score: None,
            optimizable: false,
        }
    }

    /// Creates a ternary criterion with message keys under
    /// `seo.criteria.<section>.<slug>`.
    pub fn ternary(
        id: u16,
        section: &str,
        slug: &str,
        weight: u32,
        input_keys: &[FieldKey],
    ) -> Self {
        let base = format!("seo.criteria.{section}.{slug}");
        Self {
            status_type: StatusType::Ternary,
            messages: StatusMessages::ternary(&base),
            ..Self::binary(id, section, slug, weight, input_keys)
        }
    }

    /// Overrides the warning score.
    pub fn with_warning_score(mut self, score: u32) -> Self {
        self.warning_score = Some(score);
        self
    }

    /// Marks the criterion as having an improvement function.
    pub fn optimizable(mut self) -> Self {
        self.optimizable = true;
        self
    }

    pub fn is_ternary(&self) -> bool {
        self.status_type == StatusType::Ternary
    }

    /// The field a direct improvement value replaces.
    pub fn primary_input(&self) -> Option<FieldKey> {
        self.input_keys.first().copied()
    }

    /// Returns true if the criterion depends on `key`.
    pub fn reads(&self, key: FieldKey) -> bool {
        self.input_keys.contains(&key)
    }

    /// Score awarded on a warning outcome.
    pub fn warning_points(&self) -> u32 {
        self.warning_score
            .unwrap_or_else(|| default_warning_score(self.weight, DEFAULT_WARNING_RATIO))
    }

    /// Score awarded for `status`.
    pub fn score_for(&self, status: CriterionStatus) -> u32 {
        match status {
            CriterionStatus::Success => self.weight,
            CriterionStatus::Warning => self.warning_points(),
            CriterionStatus::Error | CriterionStatus::Pending => 0,
        }
    }

    /// Message key for a settled outcome. Binary criteria fall back to the
    /// error key for a warning.
    pub fn message_for(&self, status: CriterionStatus) -> Option<&str> {
        match status {
            CriterionStatus::Success => Some(self.messages.success.as_str()),
            CriterionStatus::Warning => self
                .messages
                .warning
                .as_deref()
                .or(Some(self.messages.error.as_str())),
            CriterionStatus::Error => Some(self.messages.error.as_str()),
            CriterionStatus::Pending => None,
        }
    }
}

/// `round(weight × ratio)`.
pub fn default_warning_score(weight: u32, ratio: f64) -> u32 {
    (f64::from(weight) * ratio).round() as u32
}

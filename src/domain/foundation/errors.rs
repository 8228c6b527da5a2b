//! Error types for the domain layer.

use thiserror::Error;

use super::CriterionId;

/// Errors raised when parsing identifiers and field names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Configuration defects detected while building the registry or its
/// function tables. All of these are raised at construction time.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("Criterion {0} is declared more than once")]
    DuplicateCriterionId(CriterionId),

    #[error("Ternary criterion {0} has no warning message key")]
    MissingWarningMessage(CriterionId),

    #[error("Criterion {0} must have a positive weight")]
    ZeroWeight(CriterionId),

    #[error("Criterion {0} does not read any input field")]
    NoInputKeys(CriterionId),

    #[error("Criterion {id} warning score {warning_score} must be between 0 and {weight} exclusive")]
    InvalidWarningScore {
        id: CriterionId,
        warning_score: u32,
        weight: u32,
    },

    #[error("Warning ratio must be between 0 and 1 exclusive, got {0}")]
    InvalidWarningRatio(f64),

    #[error("No evaluation function registered for criterion {0}")]
    MissingEvaluator(CriterionId),

    #[error("Optimizable criterion {0} has no improvement function")]
    MissingImprover(CriterionId),

    #[error("Criterion {0} is not optimizable but has an improvement function")]
    UnexpectedImprover(CriterionId),
}

/// Caller errors when requesting an automatic improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImprovementError {
    #[error("Criterion {0} is not registered")]
    UnknownCriterion(CriterionId),

    #[error("Criterion {0} is not optimizable")]
    NotOptimizable(CriterionId),

    #[error("No improvement function registered for criterion {0}")]
    MissingImprover(CriterionId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("field_key", "unknown field 'subtitle'");
        assert_eq!(
            format!("{}", err),
            "Field 'field_key' has invalid format: unknown field 'subtitle'"
        );
    }

    #[test]
    fn registry_error_names_the_criterion() {
        let err = RegistryError::DuplicateCriterionId(CriterionId::new(101));
        assert_eq!(format!("{}", err), "Criterion 101 is declared more than once");
    }

    #[test]
    fn invalid_warning_score_displays_bounds() {
        let err = RegistryError::InvalidWarningScore {
            id: CriterionId::new(106),
            warning_score: 4,
            weight: 4,
        };
        assert_eq!(
            format!("{}", err),
            "Criterion 106 warning score 4 must be between 0 and 4 exclusive"
        );
    }

    #[test]
    fn improvement_error_displays_correctly() {
        let err = ImprovementError::NotOptimizable(CriterionId::new(104));
        assert_eq!(format!("{}", err), "Criterion 104 is not optimizable");
    }
}

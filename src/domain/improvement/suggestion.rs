//! Suggestion - the value an improvement function proposes.

use serde::{Deserialize, Serialize};

use crate::domain::criteria::Criterion;
use crate::domain::foundation::{FieldKey, FieldValue};

/// Proposed fix for a criterion.
///
/// The caller applies the value and re-runs evaluation; suggestions never
/// touch state themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Replacement for the criterion's primary input field.
    Replace { value: FieldValue },
    /// Update of a specific field other than the primary input.
    Update { field: FieldKey, value: FieldValue },
}

impl Suggestion {
    pub fn replace(value: impl Into<FieldValue>) -> Self {
        Self::Replace {
            value: value.into(),
        }
    }

    pub fn update(field: FieldKey, value: impl Into<FieldValue>) -> Self {
        Self::Update {
            field,
            value: value.into(),
        }
    }

    /// Field the suggestion should be written to.
    pub fn target_field(&self, criterion: &Criterion) -> Option<FieldKey> {
        match self {
            Self::Replace { .. } => criterion.primary_input(),
            Self::Update { field, .. } => Some(*field),
        }
    }

    pub fn value(&self) -> &FieldValue {
        match self {
            Self::Replace { value } | Self::Update { value, .. } => value,
        }
    }

    /// Resolves the suggestion to an explicit `(field, value)` pair.
    pub fn into_update(self, criterion: &Criterion) -> Option<(FieldKey, FieldValue)> {
        let field = self.target_field(criterion)?;
        match self {
            Self::Replace { value } | Self::Update { value, .. } => Some((field, value)),
        }
    }
}

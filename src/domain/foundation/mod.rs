//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the scoring domain.

mod criterion_status;
mod errors;
mod field_key;
mod field_value;
mod ids;
mod percentage;

pub use criterion_status::CriterionStatus;
pub use errors::{ImprovementError, RegistryError, ValidationError};
pub use field_key::FieldKey;
pub use field_value::FieldValue;
pub use ids::{CriterionId, SectionId};
pub use percentage::Percentage;

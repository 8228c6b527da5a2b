//! Criteria Module - the registry of scoring rules.
//!
//! # Components
//!
//! - `Criterion` - One named, weighted rule and its message keys
//! - `CriteriaSection` - Organizational grouping of criteria
//! - `CriteriaRegistry` - Immutable, validated catalogue with its `max_score`
//! - `DependencyIndex` - Derived field ↔ criterion lookup tables

pub mod catalogue;
mod criterion;
mod dependency_index;
mod registry;
mod section;

pub use criterion::{
    default_warning_score, Criterion, StatusMessages, StatusType, DEFAULT_WARNING_RATIO,
};
pub use dependency_index::DependencyIndex;
pub use registry::CriteriaRegistry;
pub use section::CriteriaSection;

//! Domain layer containing the scoring rules and their data model.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, field keys, statuses, errors)
//! - `criteria` - Criterion definitions, the registry and its dependency index
//! - `evaluation` - One pure evaluation function per criterion
//! - `improvement` - One pure improvement function per optimizable criterion
//! - `scoring` - Criteria state, the evaluation orchestrator and score aggregation

pub mod criteria;
pub mod evaluation;
pub mod foundation;
pub mod improvement;
pub mod scoring;

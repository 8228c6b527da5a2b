//! Scoring - criteria state, the evaluation orchestrator and score aggregation.

mod aggregator;
mod engine;
mod orchestrator;
mod state;

pub use aggregator::{ScoreAggregator, ScoreSummary, SectionScore};
pub use engine::CriteriaEngine;
pub use state::CriteriaState;

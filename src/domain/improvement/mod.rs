//! Improvement - on-demand fix suggestions for optimizable criteria.

mod rules;
mod suggestion;
mod table;

pub use suggestion::Suggestion;
pub use table::{ImprovementFn, ImprovementTable};

//! Evaluation - pure rule functions and their lookup table.

mod result;
mod rules;
mod table;
pub mod text;

pub use result::{EvaluationResult, NO_EVALUATOR_MESSAGE, PENDING_MESSAGE};
pub use table::{EvaluationFn, EvaluationTable};

//! EditingSession - drives the engine through one authoring session.
//!
//! Holds the current field values and criteria state for a piece of content:
//! 1. `start` evaluates every criterion once
//! 2. `field_changed` re-evaluates the criteria reading a committed field
//! 3. `suggest` / `apply_suggestion` run the auto-fix flow for a criterion

use tracing::{debug, info};

use crate::adapters::ContentFields;
use crate::domain::foundation::{CriterionId, FieldKey, FieldValue, ImprovementError};
use crate::domain::improvement::Suggestion;
use crate::domain::scoring::{CriteriaEngine, CriteriaState, ScoreSummary, SectionScore};
use crate::ports::ContentSnapshot;

/// Field values and criteria state of one piece of content.
#[derive(Debug, Clone)]
pub struct EditingSession<'e> {
    engine: &'e CriteriaEngine,
    fields: ContentFields,
    state: CriteriaState,
}

impl<'e> EditingSession<'e> {
    /// Creates a session with no fields and no evaluated criteria.
    pub fn new(engine: &'e CriteriaEngine) -> Self {
        Self::resume(engine, ContentFields::new(), CriteriaState::new())
    }

    /// Continues a session from previously stored fields and state.
    pub fn resume(engine: &'e CriteriaEngine, fields: ContentFields, state: CriteriaState) -> Self {
        Self {
            engine,
            fields,
            state,
        }
    }

    /// Starts a session by evaluating every criterion against `fields`.
    pub fn start(engine: &'e CriteriaEngine, fields: ContentFields) -> Self {
        let state = engine.evaluate_all(&fields);
        let session = Self::resume(engine, fields, state);

        let summary = session.summary();
        info!(
            fields = session.fields.len(),
            score = summary.total_score,
            max_score = summary.max_score,
            status = %summary.overall_status,
            "editing session started"
        );
        session
    }

    /// Records a committed value for `key` and re-evaluates the criteria
    /// that read it. `None` clears the field.
    ///
    /// Returns the criteria whose entries were replaced.
    pub fn field_changed(&mut self, key: FieldKey, value: Option<FieldValue>) -> Vec<CriterionId> {
        match &value {
            Some(value) => self.fields.set(key, value.clone()),
            None => self.fields.remove(key),
        };

        let next = self
            .engine
            .evaluate_field(key, value.as_ref(), &self.fields, &self.state);
        let changed = next.changed_since(&self.state);
        self.state = next;

        debug!(field = %key, changed = changed.len(), "field change applied");
        changed
    }

    /// Asks the improvement function of `id` for a fix, using the current
    /// value of the criterion's primary input.
    pub fn suggest(&self, id: CriterionId) -> Result<Option<Suggestion>, ImprovementError> {
        let current = self
            .engine
            .registry()
            .get(id)
            .and_then(|criterion| criterion.primary_input())
            .and_then(|key| self.fields.get_value(key));
        self.engine.improve(id, current, &self.fields)
    }

    /// Writes `suggestion` to its target field and re-evaluates.
    ///
    /// Returns the criteria whose entries were replaced.
    pub fn apply_suggestion(
        &mut self,
        id: CriterionId,
        suggestion: Suggestion,
    ) -> Result<Vec<CriterionId>, ImprovementError> {
        let criterion = self
            .engine
            .registry()
            .get(id)
            .ok_or(ImprovementError::UnknownCriterion(id))?;
        let Some((key, value)) = suggestion.into_update(criterion) else {
            return Ok(Vec::new());
        };
        Ok(self.field_changed(key, Some(value)))
    }

    /// Optimizable criteria currently offering an auto-fix.
    pub fn fixable(&self) -> Vec<CriterionId> {
        self.engine.fixable(&self.state)
    }

    pub fn summary(&self) -> ScoreSummary {
        self.engine.summarize(&self.state)
    }

    pub fn section_scores(&self) -> Vec<SectionScore> {
        self.engine.section_scores(&self.state)
    }

    pub fn state(&self) -> &CriteriaState {
        &self.state
    }

    pub fn fields(&self) -> &ContentFields {
        &self.fields
    }

    /// Hands the state back to the caller for storage.
    pub fn into_state(self) -> CriteriaState {
        self.state
    }
}

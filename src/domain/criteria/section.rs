//! CriteriaSection - organizational grouping of criteria.

use serde::{Deserialize, Serialize};

use super::Criterion;
use crate::domain::foundation::SectionId;

/// A named group of criteria. Grouping has no effect on scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaSection {
    pub id: SectionId,
    /// Opaque localization key for the section heading.
    pub title: String,
    pub criteria: Vec<Criterion>,
}

impl CriteriaSection {
    /// Creates a section titled `seo.criteria.<id>.title`.
    pub fn new(id: &str, criteria: Vec<Criterion>) -> Self {
        Self {
            id: SectionId::new(id),
            title: format!("seo.criteria.{id}.title"),
            criteria,
        }
    }

    /// Sum of the weights of this section's criteria.
    pub fn max_score(&self) -> u32 {
        self.criteria.iter().map(|c| c.weight).sum()
    }
}

//! In-memory content snapshot.
//!
//! Backs the form payload a caller hands over on session start, and is the
//! snapshot used throughout the test suites.
//!
//! # Example
//!
//! ```
//! use seo_criteria::adapters::ContentFields;
//! use seo_criteria::domain::foundation::FieldKey;
//! use seo_criteria::ports::ContentSnapshot;
//!
//! let fields = ContentFields::from_json(r#"{ "metaTitle": "Best Coffee Guide" }"#).unwrap();
//! assert_eq!(fields.text(FieldKey::MetaTitle), Some("Best Coffee Guide"));
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{FieldKey, FieldValue};
use crate::ports::ContentSnapshot;

/// Field values keyed by [`FieldKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFields {
    values: HashMap<FieldKey, FieldValue>,
}

impl ContentFields {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Self::set`].
    pub fn with(mut self, key: FieldKey, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`, returning the previous value.
    pub fn set(&mut self, key: FieldKey, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.values.insert(key, value.into())
    }

    pub fn remove(&mut self, key: FieldKey) -> Option<FieldValue> {
        self.values.remove(&key)
    }

    /// Parses a form payload keyed by camelCase field names.
    ///
    /// Values are strings or arrays of strings; unknown keys are rejected.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ContentSnapshot for ContentFields {
    fn get_value(&self, key: FieldKey) -> Option<&FieldValue> {
        self.values.get(&key)
    }
}

//! Content snapshot port.
//!
//! Defines the read-only view of the authoring form that evaluation and
//! improvement functions read from. The form/state layer owns the data; the
//! engine never mutates it.

use crate::domain::foundation::{FieldKey, FieldValue};

/// Read-only accessor over the current content field values.
pub trait ContentSnapshot {
    /// Current value of `key`, or `None` if the field is unset.
    fn get_value(&self, key: FieldKey) -> Option<&FieldValue>;

    /// Trimmed, non-empty text of `key`.
    ///
    /// Returns `None` for unset fields, blank text and list values.
    fn text(&self, key: FieldKey) -> Option<&str> {
        self.get_value(key)
            .filter(|value| !value.is_blank())
            .and_then(FieldValue::as_text)
            .map(str::trim)
    }

    /// Non-blank items of `key`.
    ///
    /// Returns `None` for unset fields, text values and lists whose items are
    /// all blank.
    fn list(&self, key: FieldKey) -> Option<Vec<&str>> {
        let items = self
            .get_value(key)
            .filter(|value| !value.is_blank())?
            .as_list()?;
        Some(
            items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    /// Raw items of `key`, blanks included. Empty lists yield `None`.
    fn raw_list(&self, key: FieldKey) -> Option<&[String]> {
        self.get_value(key)
            .and_then(FieldValue::as_list)
            .filter(|items| !items.is_empty())
    }
}

impl<T: ContentSnapshot + ?Sized> ContentSnapshot for &T {
    fn get_value(&self, key: FieldKey) -> Option<&FieldValue> {
        (**self).get_value(key)
    }
}

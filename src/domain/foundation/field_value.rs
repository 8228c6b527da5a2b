//! FieldValue - the value of one content field.

use serde::{Deserialize, Serialize};

/// A content field value: either free text or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// Returns the items, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::Text(_) => None,
            FieldValue::List(items) => Some(items),
        }
    }

    /// Returns true if the value carries no usable data.
    ///
    /// Whitespace-only text and lists whose items are all blank count as blank.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(|item| item.trim().is_empty()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_text_is_blank() {
        assert!(FieldValue::from("   ").is_blank());
        assert!(!FieldValue::from("coffee").is_blank());
    }

    #[test]
    fn list_of_blank_items_is_blank() {
        assert!(FieldValue::from(Vec::<&str>::new()).is_blank());
        assert!(FieldValue::from(vec!["", " "]).is_blank());
        assert!(!FieldValue::from(vec!["", "/about"]).is_blank());
    }

    #[test]
    fn accessors_match_variant() {
        let text = FieldValue::from("hello");
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_list().is_none());

        let list = FieldValue::from(vec!["a", "b"]);
        assert_eq!(list.as_list().map(|items| items.len()), Some(2));
        assert!(list.as_text().is_none());
    }

    #[test]
    fn deserializes_untagged_json() {
        let text: FieldValue = serde_json::from_str("\"my-post\"").unwrap();
        assert_eq!(text, FieldValue::from("my-post"));

        let list: FieldValue = serde_json::from_str("[\"/a\", \"/b\"]").unwrap();
        assert_eq!(list, FieldValue::from(vec!["/a", "/b"]));
    }
}

//! FieldKey enum naming the content fields criteria can read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// An input field of the content snapshot.
///
/// Serialized with the camelCase identifiers used by the authoring form
/// (`metaTitle`, `urlSlug`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Title,
    MetaTitle,
    MetaDescription,
    UrlSlug,
    PrimaryKeyword,
    SecondaryKeywords,
    Content,
    Toc,
    Images,
    InternalLinks,
    ExternalLinks,
    Language,
    TargetCountry,
}

impl FieldKey {
    /// Returns all field keys in form order.
    pub fn all() -> &'static [FieldKey] {
        &[
            FieldKey::Title,
            FieldKey::MetaTitle,
            FieldKey::MetaDescription,
            FieldKey::UrlSlug,
            FieldKey::PrimaryKeyword,
            FieldKey::SecondaryKeywords,
            FieldKey::Content,
            FieldKey::Toc,
            FieldKey::Images,
            FieldKey::InternalLinks,
            FieldKey::ExternalLinks,
            FieldKey::Language,
            FieldKey::TargetCountry,
        ]
    }

    /// Returns the form identifier of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::MetaTitle => "metaTitle",
            FieldKey::MetaDescription => "metaDescription",
            FieldKey::UrlSlug => "urlSlug",
            FieldKey::PrimaryKeyword => "primaryKeyword",
            FieldKey::SecondaryKeywords => "secondaryKeywords",
            FieldKey::Content => "content",
            FieldKey::Toc => "toc",
            FieldKey::Images => "images",
            FieldKey::InternalLinks => "internalLinks",
            FieldKey::ExternalLinks => "externalLinks",
            FieldKey::Language => "language",
            FieldKey::TargetCountry => "targetCountry",
        }
    }

    /// Returns true if the field holds a list of strings rather than text.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            FieldKey::SecondaryKeywords
                | FieldKey::Toc
                | FieldKey::Images
                | FieldKey::InternalLinks
                | FieldKey::ExternalLinks
        )
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKey::all()
            .iter()
            .find(|key| key.as_str() == s)
            .copied()
            .ok_or_else(|| {
                ValidationError::invalid_format("field_key", format!("unknown field '{s}'"))
            })
    }
}

//! Meta field rules (2xx).

use crate::domain::evaluation::text;
use crate::domain::foundation::CriterionStatus::{self, *};
use crate::domain::foundation::FieldKey::*;
use crate::domain::foundation::FieldValue;
use crate::ports::ContentSnapshot;

/// Graded character-length check shared by the length rules.
fn length_band(len: usize, success: (usize, usize), warning: (usize, usize)) -> CriterionStatus {
    if (success.0..=success.1).contains(&len) {
        Success
    } else if (warning.0..=warning.1).contains(&len) {
        Warning
    } else {
        Error
    }
}

/// 201: meta title characters. Success 50–60; warning 30–70; else error.
pub(super) fn meta_title_length(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let Some(title) = s.text(MetaTitle) else {
        return Pending;
    };
    length_band(text::char_len(title), (50, 60), (30, 70))
}

/// 202: meta description characters. Success 120–160; warning 70–200.
pub(super) fn meta_description_length(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let Some(description) = s.text(MetaDescription) else {
        return Pending;
    };
    length_band(text::char_len(description), (120, 160), (70, 200))
}

/// 203: success if the keyword starts in the first half of the meta title.
pub(super) fn keyword_at_title_start(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(keyword), Some(title)) = (s.text(PrimaryKeyword), s.text(MetaTitle)) else {
        return Pending;
    };
    match text::find_ci(title, keyword) {
        Some((idx, len)) if idx * 2 <= len => Success,
        _ => Error,
    }
}

/// 204: success if the slug is lowercase alphanumerics joined by single
/// hyphens and at most 75 characters long.
pub(super) fn url_slug_format(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let Some(slug) = s.text(UrlSlug) else {
        return Pending;
    };
    if text::is_valid_slug(slug) {
        Success
    } else {
        Error
    }
}

/// 205: page title characters. Success 20–70; warning 10–90.
pub(super) fn title_length(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let Some(title) = s.text(Title) else {
        return Pending;
    };
    length_band(text::char_len(title), (20, 70), (10, 90))
}

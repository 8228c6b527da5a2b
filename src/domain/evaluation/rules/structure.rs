//! Document structure rules (3xx).

use super::essentials::body;
use crate::domain::evaluation::text;
use crate::domain::foundation::CriterionStatus::{self, *};
use crate::domain::foundation::FieldKey::*;
use crate::domain::foundation::FieldValue;
use crate::ports::ContentSnapshot;

/// 301: success if some h2–h4 heading contains the keyword. A body without
/// such headings is an error.
pub(super) fn keyword_in_subheadings(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(html), Some(_), Some(keyword)) = (s.text(Content), body(s), s.text(PrimaryKeyword))
    else {
        return Pending;
    };
    let found = text::headings_between(html, 2, 4)
        .iter()
        .any(|heading| text::contains_ci(&heading.text, keyword));
    if found {
        Success
    } else {
        Error
    }
}

/// 302: body words per h2–h4 heading. Success ≤ 300; warning ≤ 600; else, or
/// with no headings, error.
pub(super) fn subheading_distribution(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(html), Some(body)) = (s.text(Content), body(s)) else {
        return Pending;
    };
    let headings = text::headings_between(html, 2, 4).len();
    if headings == 0 {
        return Error;
    }
    match body.word_count() / headings {
        n if n <= 300 => Success,
        n if n <= 600 => Warning,
        _ => Error,
    }
}

/// 303: success if every h2 heading has a matching toc entry, compared
/// case-insensitively with whitespace collapsed. A body without words is
/// treated as missing.
pub(super) fn table_of_contents(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(toc), Some(html), Some(_)) = (s.list(Toc), s.text(Content), body(s)) else {
        return Pending;
    };
    let entries: Vec<String> = toc.iter().map(|entry| text::normalize_phrase(entry)).collect();
    let covered = text::headings_between(html, 2, 2)
        .iter()
        .all(|heading| entries.contains(&text::normalize_phrase(&heading.text)));
    if covered {
        Success
    } else {
        Error
    }
}

/// 304: success if every image carries non-blank alt text.
pub(super) fn image_alt_text(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let Some(alts) = s.raw_list(Images) else {
        return Pending;
    };
    if alts.iter().all(|alt| !alt.trim().is_empty()) {
        Success
    } else {
        Error
    }
}

/// 305: share of secondary keywords found in the body. Success when all are
/// present; warning for at least half; else error.
pub(super) fn secondary_keywords_in_content(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(keywords), Some(body)) = (s.list(SecondaryKeywords), body(s)) else {
        return Pending;
    };
    let present = keywords
        .iter()
        .filter(|keyword| text::contains_ci(body.plain(), keyword))
        .count();
    if present == keywords.len() {
        Success
    } else if present * 2 >= keywords.len() {
        Warning
    } else {
        Error
    }
}

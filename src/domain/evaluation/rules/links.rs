//! Link rules (4xx).

use crate::domain::evaluation::text;
use crate::domain::foundation::CriterionStatus::{self, *};
use crate::domain::foundation::FieldKey::{self, *};
use crate::domain::foundation::FieldValue;
use crate::ports::ContentSnapshot;

/// Non-blank links of `key`. `None` when the field is unset, empty or blank.
fn link_count(s: &dyn ContentSnapshot, key: FieldKey) -> Option<usize> {
    s.list(key).map(|links| links.len())
}

/// 401: success with 3 or more internal links; warning with 2; else error.
pub(super) fn internal_links(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    match link_count(s, InternalLinks) {
        None => Pending,
        Some(n) if n >= 3 => Success,
        Some(2) => Warning,
        Some(_) => Error,
    }
}

/// 402: success with 2–10 external links; warning with 1 or 11–20; else error.
pub(super) fn external_links(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    match link_count(s, ExternalLinks) {
        None => Pending,
        Some(2..=10) => Success,
        Some(1) | Some(11..=20) => Warning,
        Some(_) => Error,
    }
}

/// 403: success if every external link uses https.
pub(super) fn external_links_secure(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let Some(links) = s.list(ExternalLinks) else {
        return Pending;
    };
    if links.iter().all(|link| text::is_https(link)) {
        Success
    } else {
        Error
    }
}

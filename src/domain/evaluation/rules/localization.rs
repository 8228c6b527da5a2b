//! Localization rules (5xx).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::CriterionStatus::{self, *};
use crate::domain::foundation::FieldKey::*;
use crate::domain::foundation::FieldValue;
use crate::ports::ContentSnapshot;

static LANGUAGE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z]{2,3}(?:[-_][a-z]{2})?$").expect("language pattern is valid")
});

static COUNTRY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]{2}$").expect("country pattern is valid"));

/// 501: ISO 639 language code with an optional region, e.g. `en` or `en-US`.
pub(super) fn language_code(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let Some(code) = s.text(Language) else {
        return Pending;
    };
    if LANGUAGE_CODE.is_match(code) {
        Success
    } else {
        Error
    }
}

/// 502: ISO 3166 alpha-2 country code.
pub(super) fn target_country_code(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let Some(code) = s.text(TargetCountry) else {
        return Pending;
    };
    if COUNTRY_CODE.is_match(code) {
        Success
    } else {
        Error
    }
}

//! Core keyword and length rules (1xx).

use crate::domain::evaluation::text::{self, Body};
use crate::domain::foundation::CriterionStatus::{self, *};
use crate::domain::foundation::FieldKey::*;
use crate::domain::foundation::FieldValue;
use crate::ports::ContentSnapshot;

/// Words at the start of the body treated as the introduction.
const INTRODUCTION_WORDS: usize = 100;

/// 101: success if the meta title contains the keyword phrase; warning if it
/// contains every word of a multi-word keyword but not the phrase; else error.
pub(super) fn keyword_in_title(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let (Some(title), Some(keyword)) = (s.text(MetaTitle), s.text(PrimaryKeyword)) else {
        return Pending;
    };
    if text::contains_ci(title, keyword) {
        Success
    } else if text::contains_all_words_ci(title, keyword) {
        Warning
    } else {
        Error
    }
}

/// 102: success if the meta description contains the keyword.
pub(super) fn keyword_in_meta_description(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(description), Some(keyword)) = (s.text(MetaDescription), s.text(PrimaryKeyword))
    else {
        return Pending;
    };
    if text::contains_ci(description, keyword) {
        Success
    } else {
        Error
    }
}

/// 103: success if the slug contains the slugified keyword.
pub(super) fn keyword_in_url(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let (Some(slug), Some(keyword)) = (s.text(UrlSlug), s.text(PrimaryKeyword)) else {
        return Pending;
    };
    let keyword_slug = text::slugify(keyword);
    if !keyword_slug.is_empty() && text::contains_ci(slug, &keyword_slug) {
        Success
    } else {
        Error
    }
}

/// 104: success if the keyword appears within the first 100 words.
pub(super) fn keyword_in_introduction(
    _: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> CriterionStatus {
    let (Some(body), Some(keyword)) = (body(s), s.text(PrimaryKeyword)) else {
        return Pending;
    };
    let introduction = body
        .words()
        .take(INTRODUCTION_WORDS)
        .collect::<Vec<_>>()
        .join(" ");
    if text::contains_ci(&introduction, keyword) {
        Success
    } else {
        Error
    }
}

/// 105: keyword density as a percentage of body words.
/// Success 1.0–2.5 %; warning 0.5–1.0 % or 2.5–3.5 %; else error.
pub(super) fn keyword_density(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let (Some(body), Some(keyword)) = (body(s), s.text(PrimaryKeyword)) else {
        return Pending;
    };
    let keyword_words = text::words(keyword).count().max(1);
    let occurrences = text::count_ci(body.plain(), keyword);
    let density = (occurrences * keyword_words) as f64 / body.word_count() as f64 * 100.0;

    if (1.0..=2.5).contains(&density) {
        Success
    } else if (0.5..=3.5).contains(&density) {
        Warning
    } else {
        Error
    }
}

/// 106: success if the body has at least 2500 words; warning at least 1000;
/// else error.
pub(super) fn content_length(_: Option<&FieldValue>, s: &dyn ContentSnapshot) -> CriterionStatus {
    let Some(body) = body(s) else {
        return Pending;
    };
    match body.word_count() {
        n if n >= 2500 => Success,
        n if n >= 1000 => Warning,
        _ => Error,
    }
}

/// Body with at least one word, or `None` when the content is effectively empty.
pub(super) fn body(s: &dyn ContentSnapshot) -> Option<Body> {
    let body = Body::from_html(s.text(Content)?);
    if body.word_count() == 0 {
        None
    } else {
        Some(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ContentFields;
    use crate::domain::evaluation::rules::fixtures::{body_of, with_keyword};

    #[test]
    fn title_rule_is_pending_without_title() {
        let fields = with_keyword("coffee").with(MetaTitle, "");
        assert_eq!(keyword_in_title(None, &fields), Pending);
    }

    #[test]
    fn title_rule_matches_case_insensitively() {
        let fields = with_keyword("coffee").with(MetaTitle, "Best Coffee Guide");
        assert_eq!(keyword_in_title(None, &fields), Success);
    }

    #[test]
    fn title_rule_warns_on_scattered_words() {
        let fields = with_keyword("coffee guide").with(MetaTitle, "Guide to Great Coffee");
        assert_eq!(keyword_in_title(None, &fields), Warning);
    }

    #[test]
    fn title_rule_errors_when_keyword_absent() {
        let fields = with_keyword("coffee").with(MetaTitle, "Best Tea Guide");
        assert_eq!(keyword_in_title(None, &fields), Error);
    }

    #[test]
    fn meta_description_rule() {
        let fields = with_keyword("cold brew")
            .with(MetaDescription, "Learn to make Cold Brew at home.");
        assert_eq!(keyword_in_meta_description(None, &fields), Success);
        assert_eq!(
            keyword_in_meta_description(None, &with_keyword("cold brew")),
            Pending
        );
    }

    #[test]
    fn url_rule_compares_slugified_keyword() {
        let fields = with_keyword("Cold Brew").with(UrlSlug, "how-to-make-cold-brew");
        assert_eq!(keyword_in_url(None, &fields), Success);

        let fields = with_keyword("Cold Brew").with(UrlSlug, "how-to-make-coffee");
        assert_eq!(keyword_in_url(None, &fields), Error);
    }

    #[test]
    fn introduction_rule_only_reads_first_100_words() {
        let early = format!("<p>coffee {}</p>", vec!["word"; 200].join(" "));
        let fields = with_keyword("coffee").with(Content, early.as_str());
        assert_eq!(keyword_in_introduction(None, &fields), Success);

        let late = format!("<p>{} coffee</p>", vec!["word"; 200].join(" "));
        let fields = with_keyword("coffee").with(Content, late.as_str());
        assert_eq!(keyword_in_introduction(None, &fields), Error);
    }

    #[test]
    fn density_bands() {
        let at = |hits: usize| {
            let mut words = vec!["word"; 100 - hits];
            words.extend(vec!["coffee"; hits]);
            let html = format!("<p>{}</p>", words.join(" "));
            keyword_density(None, &with_keyword("coffee").with(Content, html.as_str()))
        };
        assert_eq!(at(2), Success);
        assert_eq!(at(3), Warning);
        assert_eq!(at(5), Error);
        assert_eq!(at(0), Error);
    }

    #[test]
    fn content_length_bands() {
        let at = |count: usize| {
            content_length(None, &ContentFields::new().with(Content, body_of(count).as_str()))
        };
        assert_eq!(at(3000), Success);
        assert_eq!(at(2500), Success);
        assert_eq!(at(1500), Warning);
        assert_eq!(at(500), Error);
    }

    #[test]
    fn markup_without_words_is_pending() {
        let fields = ContentFields::new().with(Content, "<p> </p><img src=\"a.png\">");
        assert_eq!(content_length(None, &fields), Pending);
    }
}

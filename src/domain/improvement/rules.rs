//! Improvement functions of the standard catalogue.
//!
//! Each fixer reads the value being edited when one is given and falls back
//! to the snapshot otherwise.

use regex::RegexBuilder;

use super::{ImprovementTable, Suggestion};
use crate::domain::evaluation::text::{self, MAX_SLUG_CHARS};
use crate::domain::foundation::FieldKey::{self, *};
use crate::domain::foundation::FieldValue;
use crate::ports::ContentSnapshot;

const META_TITLE_MAX_CHARS: usize = 60;
const META_DESCRIPTION_MAX_CHARS: usize = 160;

pub(crate) fn standard_table() -> ImprovementTable {
    ImprovementTable::new()
        .with(101, keyword_in_title)
        .with(102, keyword_in_meta_description)
        .with(103, keyword_in_url)
        .with(201, meta_title_length)
        .with(202, meta_description_length)
        .with(203, keyword_at_title_start)
        .with(204, url_slug_format)
        .with(303, table_of_contents)
        .with(403, external_links_secure)
}

fn current_text<'a>(
    current: Option<&'a FieldValue>,
    s: &'a dyn ContentSnapshot,
    key: FieldKey,
) -> Option<&'a str> {
    current
        .and_then(FieldValue::as_text)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| s.text(key))
}

fn current_list<'a>(
    current: Option<&'a FieldValue>,
    s: &'a dyn ContentSnapshot,
    key: FieldKey,
) -> Option<Vec<&'a str>> {
    let from_current: Option<Vec<&str>> = current.and_then(FieldValue::as_list).map(|items| {
        items
            .iter()
            .map(|item| item.trim())
            .filter(|item| !item.is_empty())
            .collect()
    });
    match from_current {
        Some(items) if !items.is_empty() => Some(items),
        _ => s.list(key),
    }
}

/// Prefixes `value` with the capitalized keyword unless it already has it.
fn prefix_with_keyword(value: &str, keyword: &str, separator: &str) -> Option<Suggestion> {
    if text::contains_ci(value, keyword) {
        return None;
    }
    Some(Suggestion::replace(format!(
        "{}{separator}{value}",
        text::capitalize(keyword)
    )))
}

fn keyword_in_title(current: Option<&FieldValue>, s: &dyn ContentSnapshot) -> Option<Suggestion> {
    let title = current_text(current, s, MetaTitle)?;
    prefix_with_keyword(title, s.text(PrimaryKeyword)?, " - ")
}

fn keyword_in_meta_description(
    current: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> Option<Suggestion> {
    let description = current_text(current, s, MetaDescription)?;
    prefix_with_keyword(description, s.text(PrimaryKeyword)?, ": ")
}

fn keyword_in_url(current: Option<&FieldValue>, s: &dyn ContentSnapshot) -> Option<Suggestion> {
    let slug = current_text(current, s, UrlSlug)?;
    let keyword = text::slugify(s.text(PrimaryKeyword)?);
    if keyword.is_empty() || text::contains_ci(slug, &keyword) {
        return None;
    }
    let rest = text::slugify(slug);
    let joined = if rest.is_empty() {
        keyword
    } else {
        format!("{keyword}-{rest}")
    };
    Some(Suggestion::replace(text::truncate_slug(&joined, MAX_SLUG_CHARS)))
}

/// Shortens an overlong value; too-short values have no automatic fix.
fn shorten(value: &str, max_chars: usize) -> Option<Suggestion> {
    if text::char_len(value) <= max_chars {
        return None;
    }
    Some(Suggestion::replace(text::truncate_at_word(value, max_chars)))
}

fn meta_title_length(current: Option<&FieldValue>, s: &dyn ContentSnapshot) -> Option<Suggestion> {
    shorten(current_text(current, s, MetaTitle)?, META_TITLE_MAX_CHARS)
}

fn meta_description_length(
    current: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> Option<Suggestion> {
    shorten(current_text(current, s, MetaDescription)?, META_DESCRIPTION_MAX_CHARS)
}

/// Moves the keyword to the front of the meta title. The primary input of
/// this criterion is the keyword, so the fix names the title explicitly.
fn keyword_at_title_start(
    current: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> Option<Suggestion> {
    let keyword = current_text(current, s, PrimaryKeyword)?;
    let title = s.text(MetaTitle)?;
    if let Some((idx, len)) = text::find_ci(title, keyword) {
        if idx * 2 <= len {
            return None;
        }
    }

    let pattern = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .ok()?;
    let without = pattern.replacen(title, 1, " ");
    let rest = without
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let rest = rest.trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | ':' | '|' | ','));

    let title = if rest.is_empty() {
        text::capitalize(keyword)
    } else {
        format!("{} - {rest}", text::capitalize(keyword))
    };
    Some(Suggestion::update(MetaTitle, title))
}

fn url_slug_format(current: Option<&FieldValue>, s: &dyn ContentSnapshot) -> Option<Suggestion> {
    let slug = current_text(current, s, UrlSlug)?;
    let fixed = text::truncate_slug(&text::slugify(slug), MAX_SLUG_CHARS);
    if fixed.is_empty() || fixed == slug {
        None
    } else {
        Some(Suggestion::replace(fixed))
    }
}

fn table_of_contents(current: Option<&FieldValue>, s: &dyn ContentSnapshot) -> Option<Suggestion> {
    let html = s.text(Content)?;
    let entries: Vec<String> = text::headings_between(html, 2, 2)
        .into_iter()
        .map(|heading| heading.text)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.is_empty() {
        return None;
    }

    let unchanged = current_list(current, s, Toc).is_some_and(|toc| {
        toc.len() == entries.len()
            && toc
                .iter()
                .zip(&entries)
                .all(|(a, b)| text::normalize_phrase(a) == text::normalize_phrase(b))
    });
    if unchanged {
        None
    } else {
        Some(Suggestion::replace(entries))
    }
}

fn external_links_secure(
    current: Option<&FieldValue>,
    s: &dyn ContentSnapshot,
) -> Option<Suggestion> {
    let links = current_list(current, s, ExternalLinks)?;
    if links.iter().all(|link| text::is_https(link)) {
        return None;
    }
    let upgraded: Vec<String> = links.iter().map(|link| text::upgrade_to_https(link)).collect();
    Some(Suggestion::replace(upgraded))
}

//! Text measurement helpers shared by evaluation and improvement rules.
//!
//! Markup is handled only as far as measuring needs: tags are stripped and a
//! handful of common entities decoded. No document model is built.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

static HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").expect("heading pattern is valid")
});

static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/// Longest URL slug considered well-formed.
pub const MAX_SLUG_CHARS: usize = 75;

/// A heading found in body markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

/// Body markup reduced to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    plain: String,
}

impl Body {
    pub fn from_html(html: &str) -> Self {
        Self {
            plain: plain_text(html),
        }
    }

    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Whitespace-separated tokens containing at least one letter or digit.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        words(&self.plain)
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

/// Strips tags, decodes common entities and collapses whitespace.
pub fn plain_text(html: &str) -> String {
    let stripped = TAG.replace_all(html, " ");
    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
}

/// Length in characters, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Case-insensitive substring containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True when `phrase` has two or more words and each appears in `haystack`,
/// case-insensitively.
pub fn contains_all_words_ci(haystack: &str, phrase: &str) -> bool {
    let haystack = haystack.to_lowercase();
    let phrase = phrase.to_lowercase();
    let parts: Vec<&str> = words(&phrase).collect();
    parts.len() > 1 && parts.iter().all(|part| haystack.contains(part))
}

/// Character position of the first case-insensitive match of `needle`.
///
/// Returns the position together with the character length of the lowered
/// haystack it was measured against.
pub fn find_ci(haystack: &str, needle: &str) -> Option<(usize, usize)> {
    let lowered = haystack.to_lowercase();
    let needle = needle.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    lowered
        .find(&needle)
        .map(|byte_idx| (char_len(&lowered[..byte_idx]), char_len(&lowered)))
}

/// Number of non-overlapping case-insensitive matches of `needle`.
pub fn count_ci(haystack: &str, needle: &str) -> usize {
    let needle = normalize_phrase(needle);
    if needle.is_empty() {
        return 0;
    }
    normalize_phrase(haystack).matches(&needle).count()
}

/// Lowercases and collapses whitespace.
pub fn normalize_phrase(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Headings of `html` in document order, with inner markup stripped.
pub fn headings(html: &str) -> Vec<Heading> {
    HEADING
        .captures_iter(html)
        .filter_map(|caps| {
            let level = caps.get(1)?.as_str().parse::<u8>().ok()?;
            let text = plain_text(caps.get(2)?.as_str());
            Some(Heading { level, text })
        })
        .collect()
}

/// Headings whose level lies in `min..=max`.
pub fn headings_between(html: &str, min: u8, max: u8) -> Vec<Heading> {
    headings(html)
        .into_iter()
        .filter(|heading| (min..=max).contains(&heading.level))
        .collect()
}

/// Lowercase ASCII letters and digits joined by single hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

pub fn is_valid_slug(slug: &str) -> bool {
    char_len(slug) <= MAX_SLUG_CHARS && SLUG.is_match(slug)
}

/// Cuts a slug to `max_chars` on a hyphen boundary.
pub fn truncate_slug(slug: &str, max_chars: usize) -> String {
    if char_len(slug) <= max_chars {
        return slug.to_string();
    }
    let mut out = String::new();
    for part in slug.split('-') {
        let extra = if out.is_empty() { part.len() } else { part.len() + 1 };
        if out.len() + extra > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push('-');
        }
        out.push_str(part);
    }
    if out.is_empty() {
        slug.chars().take(max_chars).collect()
    } else {
        out
    }
}

/// Cuts `text` to at most `max_chars` characters on a word boundary and
/// drops trailing punctuation left at the cut.
pub fn truncate_at_word(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    if char_len(text) <= max_chars {
        return text.to_string();
    }

    let mut out = String::new();
    for word in text.split_whitespace() {
        let extra = if out.is_empty() {
            char_len(word)
        } else {
            char_len(word) + 1
        };
        if char_len(&out) + extra > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }

    if out.is_empty() {
        return text.chars().take(max_chars).collect();
    }
    out.trim_end_matches(|c: char| matches!(c, ',' | ';' | ':' | '-' | '|'))
        .trim_end()
        .to_string()
}

/// True when `link` starts with `https://`, ignoring ASCII case.
pub fn is_https(link: &str) -> bool {
    link.get(..8)
        .map(|scheme| scheme.eq_ignore_ascii_case("https://"))
        .unwrap_or(false)
}

/// Rewrites a leading `http://` to `https://`; other links are returned as is.
pub fn upgrade_to_https(link: &str) -> String {
    match link.get(..7) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http://") => format!("https://{}", &link[7..]),
        _ => link.to_string(),
    }
}

/// Uppercases the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_tags_and_entities() {
        let html = "<h1>Coffee&nbsp;Guide</h1><p>Beans &amp; <b>brews</b></p>";
        assert_eq!(plain_text(html), "Coffee Guide Beans & brews");
    }

    #[test]
    fn words_ignore_punctuation_tokens() {
        let body = Body::from_html("<p>One - two, three!</p>");
        assert_eq!(body.word_count(), 3);
    }

    #[test]
    fn contains_ci_ignores_case() {
        assert!(contains_ci("Best Coffee Guide", "coffee"));
        assert!(!contains_ci("Best Tea Guide", "coffee"));
    }

    #[test]
    fn contains_all_words_requires_multi_word_phrase() {
        assert!(contains_all_words_ci("Guide to Coffee Brewing", "coffee guide"));
        assert!(!contains_all_words_ci("Coffee", "coffee"));
        assert!(!contains_all_words_ci("Guide to Tea", "coffee guide"));
    }

    #[test]
    fn find_ci_reports_char_position() {
        assert_eq!(find_ci("Best Coffee Guide", "coffee"), Some((5, 17)));
        assert_eq!(find_ci("Best Coffee Guide", "tea"), None);
        assert_eq!(find_ci("anything", ""), None);
    }

    #[test]
    fn count_ci_counts_non_overlapping_phrases() {
        assert_eq!(count_ci("Coffee and more coffee. COFFEE!", "coffee"), 3);
        assert_eq!(count_ci("cold  brew and Cold Brew", "cold brew"), 2);
        assert_eq!(count_ci("text", "  "), 0);
    }

    #[test]
    fn headings_extracts_level_and_text() {
        let html = "<h2 id=\"a\">Why <em>Coffee</em></h2><p>x</p><H3>Beans</H3>";
        let found = headings(html);
        assert_eq!(
            found,
            vec![
                Heading { level: 2, text: "Why Coffee".to_string() },
                Heading { level: 3, text: "Beans".to_string() },
            ]
        );
        assert_eq!(headings_between(html, 3, 4).len(), 1);
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Best Coffee -- Guide 2024! "), "best-coffee-guide-2024");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("my-post"));
        assert!(!is_valid_slug("My-Post"));
        assert!(!is_valid_slug("my--post"));
        assert!(!is_valid_slug("-my-post"));
        assert!(!is_valid_slug(&"a".repeat(76)));
    }

    #[test]
    fn truncate_slug_keeps_whole_parts() {
        assert_eq!(truncate_slug("alpha-beta-gamma", 11), "alpha-beta");
        assert_eq!(truncate_slug("short", 10), "short");
    }

    #[test]
    fn truncate_at_word_respects_boundaries() {
        assert_eq!(truncate_at_word("The quick brown fox", 12), "The quick");
        assert_eq!(truncate_at_word("Coffee, tea", 8), "Coffee");
        assert_eq!(truncate_at_word("short", 60), "short");
    }

    #[test]
    fn https_detection_and_upgrade() {
        assert!(is_https("HTTPS://a.b"));
        assert!(!is_https("http://"));
        assert!(!is_https("é"));
        assert_eq!(upgrade_to_https("HTTP://a.b/c"), "https://a.b/c");
        assert_eq!(upgrade_to_https("https://a.b"), "https://a.b");
        assert_eq!(upgrade_to_https("ftp://a.b"), "ftp://a.b");
    }

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("coffee guide"), "Coffee guide");
        assert_eq!(capitalize(""), "");
    }
}

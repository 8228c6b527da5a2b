//! The standard SEO criteria catalogue.
//!
//! Adding a rule means adding one entry here plus one evaluation function
//! (and, if optimizable, one improvement function). Thresholds are documented
//! beside each rule in `evaluation::rules`.

use super::{CriteriaSection, Criterion};
use crate::domain::foundation::FieldKey::*;

pub const CORE: &str = "core";
pub const META: &str = "meta";
pub const STRUCTURE: &str = "structure";
pub const LINKS: &str = "links";
pub const LOCALIZATION: &str = "localization";

/// Sections of the standard catalogue in display order.
pub fn standard_sections() -> Vec<CriteriaSection> {
    vec![
        CriteriaSection::new(
            CORE,
            vec![
                Criterion::ternary(101, CORE, "keyword_in_title", 30, &[MetaTitle, PrimaryKeyword])
                    .with_warning_score(21)
                    .optimizable(),
                Criterion::binary(
                    102,
                    CORE,
                    "keyword_in_meta_description",
                    15,
                    &[MetaDescription, PrimaryKeyword],
                )
                .optimizable(),
                Criterion::binary(103, CORE, "keyword_in_url", 10, &[UrlSlug, PrimaryKeyword])
                    .optimizable(),
                Criterion::binary(
                    104,
                    CORE,
                    "keyword_in_introduction",
                    10,
                    &[Content, PrimaryKeyword],
                ),
                Criterion::ternary(105, CORE, "keyword_density", 8, &[Content, PrimaryKeyword]),
                Criterion::ternary(106, CORE, "content_length", 4, &[Content])
                    .with_warning_score(3),
            ],
        ),
        CriteriaSection::new(
            META,
            vec![
                Criterion::ternary(201, META, "meta_title_length", 6, &[MetaTitle]).optimizable(),
                Criterion::ternary(202, META, "meta_description_length", 6, &[MetaDescription])
                    .optimizable(),
                Criterion::binary(
                    203,
                    META,
                    "keyword_at_title_start",
                    3,
                    &[PrimaryKeyword, MetaTitle],
                )
                .optimizable(),
                Criterion::binary(204, META, "url_slug_format", 4, &[UrlSlug]).optimizable(),
                Criterion::ternary(205, META, "title_length", 3, &[Title]),
            ],
        ),
        CriteriaSection::new(
            STRUCTURE,
            vec![
                Criterion::binary(
                    301,
                    STRUCTURE,
                    "keyword_in_subheadings",
                    5,
                    &[Content, PrimaryKeyword],
                ),
                Criterion::ternary(302, STRUCTURE, "subheading_distribution", 3, &[Content]),
                Criterion::binary(303, STRUCTURE, "table_of_contents", 3, &[Toc, Content])
                    .optimizable(),
                Criterion::binary(304, STRUCTURE, "image_alt_text", 3, &[Images]),
                Criterion::ternary(
                    305,
                    STRUCTURE,
                    "secondary_keywords_in_content",
                    5,
                    &[SecondaryKeywords, Content],
                ),
            ],
        ),
        CriteriaSection::new(
            LINKS,
            vec![
                Criterion::ternary(401, LINKS, "internal_links", 4, &[InternalLinks]),
                Criterion::ternary(402, LINKS, "external_links", 3, &[ExternalLinks]),
                Criterion::binary(403, LINKS, "external_links_secure", 2, &[ExternalLinks])
                    .optimizable(),
            ],
        ),
        CriteriaSection::new(
            LOCALIZATION,
            vec![
                Criterion::binary(501, LOCALIZATION, "language_code", 2, &[Language]),
                Criterion::binary(502, LOCALIZATION, "target_country_code", 2, &[TargetCountry]),
            ],
        ),
    ]
}

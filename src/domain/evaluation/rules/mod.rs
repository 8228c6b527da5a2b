//! Rule functions of the standard catalogue, one per criterion.
//!
//! Every rule returns `Pending` when one of its inputs is missing or blank and
//! reserves `Error` for data that is present but does not conform.

mod essentials;
mod links;
mod localization;
mod meta;
mod structure;

use super::EvaluationTable;

pub(crate) fn standard_table() -> EvaluationTable {
    EvaluationTable::new()
        .with(101, essentials::keyword_in_title)
        .with(102, essentials::keyword_in_meta_description)
        .with(103, essentials::keyword_in_url)
        .with(104, essentials::keyword_in_introduction)
        .with(105, essentials::keyword_density)
        .with(106, essentials::content_length)
        .with(201, meta::meta_title_length)
        .with(202, meta::meta_description_length)
        .with(203, meta::keyword_at_title_start)
        .with(204, meta::url_slug_format)
        .with(205, meta::title_length)
        .with(301, structure::keyword_in_subheadings)
        .with(302, structure::subheading_distribution)
        .with(303, structure::table_of_contents)
        .with(304, structure::image_alt_text)
        .with(305, structure::secondary_keywords_in_content)
        .with(401, links::internal_links)
        .with(402, links::external_links)
        .with(403, links::external_links_secure)
        .with(501, localization::language_code)
        .with(502, localization::target_country_code)
}

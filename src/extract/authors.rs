//! Author profile extraction
//!
//! A profile page carries at most one `.author-details` block. A page without
//! one yields no record rather than an error; a block missing any of its four
//! fields is malformed.

use crate::extract::{selector, ExtractError};
use scraper::{ElementRef, Html};
use serde::{Deserialize, Serialize};

/// One extracted author profile, in the shape it is exported and seeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRecord {
    /// Display name from the profile header
    pub full_name: String,

    /// Birth date as printed on the page, e.g. "March 14, 1879"
    pub born_date: String,

    /// Birth location as printed on the page, e.g. "in Ulm, Germany"
    pub born_location: String,

    /// Biography paragraph
    pub description: String,
}

/// Extracts the author profile from a profile page
///
/// All four fields are whitespace-trimmed.
///
/// # Returns
///
/// * `Ok(Some(AuthorRecord))` - The page carried a complete details block
/// * `Ok(None)` - No `.author-details` block on the page
/// * `Err(ExtractError)` - A details block was present but incomplete
pub fn extract_author(html: &str) -> Result<Option<AuthorRecord>, ExtractError> {
    let document = Html::parse_document(html);

    let details_selector = selector(".author-details")?;
    let details = match document.select(&details_selector).next() {
        Some(block) => block,
        None => return Ok(None),
    };

    let full_name = field_text(details, "h3.author-title")?;
    let born_date = field_text(details, "span.author-born-date")?;
    let born_location = field_text(details, "span.author-born-location")?;
    let description = field_text(details, "div.author-description")?;

    Ok(Some(AuthorRecord {
        full_name,
        born_date,
        born_location,
        description,
    }))
}

/// Collects the trimmed text of the first match of `css` inside the details block
fn field_text(details: ElementRef<'_>, css: &'static str) -> Result<String, ExtractError> {
    let sel = selector(css)?;
    details
        .select(&sel)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .ok_or(ExtractError::MissingAuthorField { field: css })
}

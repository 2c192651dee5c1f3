//! Quote extraction from listing pages
//!
//! A listing page carries zero or more `.quote` blocks. Each block yields:
//! - the quote text (`span.text`)
//! - the author display name (`small.author`)
//! - tag labels in document order (`a.tag`)
//! - an author profile link, resolved against the configured author base URL

use crate::extract::{selector, ExtractError};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

/// One extracted quote, in the shape it is exported and seeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Quote text exactly as it appears in the markup, untrimmed
    pub text: String,

    /// Author display name from the listing block
    pub author: String,

    /// Tag labels in the order the page lists them
    pub tags: Vec<String>,
}

/// Everything extracted from one listing page
#[derive(Debug, Clone)]
pub struct PageExtract {
    pub quotes: Vec<QuoteRecord>,

    /// Author profile URLs in block order, not yet deduplicated
    pub author_urls: Vec<Url>,
}

/// Extracts all quotes and author profile links from a listing page
///
/// Zero quote blocks is a valid result; a present but incomplete block is an
/// error that fails the whole page.
///
/// # Arguments
///
/// * `html` - The listing page HTML
/// * `author_base` - Base URL that profile hrefs are resolved against
///
/// # Returns
///
/// * `Ok(PageExtract)` - Every quote block extracted, possibly zero
/// * `Err(ExtractError)` - A quote block was missing a required part
pub fn extract_quotes(html: &str, author_base: &Url) -> Result<PageExtract, ExtractError> {
    let document = Html::parse_document(html);

    let quote_selector = selector(".quote")?;
    let text_selector = selector("span.text")?;
    let author_selector = selector("small.author")?;
    let tag_selector = selector("a.tag")?;
    let anchor_selector = selector("a")?;

    let mut quotes = Vec::new();
    let mut author_urls = Vec::new();

    for block in document.select(&quote_selector) {
        let text = required_text(block, &text_selector, "span.text")?;
        let author = required_text(block, &author_selector, "small.author")?;

        let tags = block
            .select(&tag_selector)
            .map(|tag| tag.text().collect::<String>())
            .collect();

        // The profile link is the first anchor in the block; in the listing
        // markup the "(about)" link precedes all tag links
        let link = block.select(&anchor_selector).next().ok_or(
            ExtractError::MissingQuoteField {
                field: "author link",
            },
        )?;
        let href = link
            .value()
            .attr("href")
            .ok_or(ExtractError::MissingQuoteField {
                field: "author link href",
            })?;
        let profile_url =
            author_base
                .join(href)
                .map_err(|source| ExtractError::AuthorLink {
                    href: href.to_string(),
                    source,
                })?;

        author_urls.push(profile_url);
        quotes.push(QuoteRecord { text, author, tags });
    }

    Ok(PageExtract {
        quotes,
        author_urls,
    })
}

/// Collects the text of the first match of `sel` inside the quote block
fn required_text(
    block: ElementRef<'_>,
    sel: &Selector,
    field: &'static str,
) -> Result<String, ExtractError> {
    block
        .select(sel)
        .next()
        .map(|element| element.text().collect::<String>())
        .ok_or(ExtractError::MissingQuoteField { field })
}

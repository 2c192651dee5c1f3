//! HTML extraction for listing and profile pages
//!
//! Extraction is pure: functions take HTML text plus the URLs needed for
//! link resolution and return typed records. Fetching lives in [`crate::crawl`].

mod authors;
mod quotes;

// Re-export record types and entry points
pub use authors::{extract_author, AuthorRecord};
pub use quotes::{extract_quotes, PageExtract, QuoteRecord};

use scraper::Selector;
use thiserror::Error;

/// Extraction-specific errors
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    Selector {
        selector: &'static str,
        message: String,
    },

    #[error("Quote block is missing {field}")]
    MissingQuoteField { field: &'static str },

    #[error("Author details block is missing {field}")]
    MissingAuthorField { field: &'static str },

    #[error("Cannot resolve author link '{href}': {source}")]
    AuthorLink {
        href: String,
        source: url::ParseError,
    },
}

/// Parses one of the fixed CSS selectors the extractors use
pub(crate) fn selector(css: &'static str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector {
        selector: css,
        message: e.to_string(),
    })
}

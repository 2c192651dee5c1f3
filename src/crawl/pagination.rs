//! Sequential listing pagination
//!
//! Page 1 is the configured base URL itself; page `n` lives at
//! `{base}/page/{n}`. Pages are fetched strictly one after another, and the
//! walk ends at the first non-success status or the first page whose HTML
//! yields zero quotes, whichever comes first. A page that ends the walk
//! contributes nothing to the results.

use crate::config::CrawlConfig;
use crate::crawl::fetcher::{fetch_listing_page, ListingFetch};
use crate::extract::{extract_quotes, QuoteRecord};
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// One successfully fetched listing page
#[derive(Debug)]
pub struct FetchedPage {
    pub url: Url,
    pub body: String,
}

/// Lazily walks the listing pages in order
///
/// The walk is one-way: once a non-success status has been seen, every later
/// call returns `None` without fetching anything.
pub struct Paginator<'a> {
    client: &'a Client,
    base: Url,
    page: u32,
    done: bool,
}

impl<'a> Paginator<'a> {
    /// Creates a paginator starting at page 1 of `base`
    pub fn new(client: &'a Client, base: Url) -> Self {
        Self {
            client,
            base,
            page: 1,
            done: false,
        }
    }

    /// Fetches the next listing page, or `None` once the walk is over
    pub async fn next_page(&mut self) -> Result<Option<FetchedPage>> {
        if self.done {
            return Ok(None);
        }

        let url = page_url(&self.base, self.page)?;
        match fetch_listing_page(self.client, &url).await? {
            ListingFetch::Content { body } => {
                self.page += 1;
                Ok(Some(FetchedPage { url, body }))
            }
            ListingFetch::EndOfPages { status } => {
                tracing::info!("Listing page {} returned status {}, stopping", url, status);
                self.done = true;
                Ok(None)
            }
        }
    }
}

/// Builds the URL for a given listing page number
///
/// Page 1 is the base URL itself; later pages append `/page/{n}` to the base
/// path.
pub fn page_url(base: &Url, page: u32) -> std::result::Result<Url, url::ParseError> {
    if page <= 1 {
        return Ok(base.clone());
    }

    Url::parse(&format!(
        "{}/page/{}",
        base.as_str().trim_end_matches('/'),
        page
    ))
}

/// Everything the pagination phase collects
#[derive(Debug)]
pub struct PaginationResult {
    /// Quotes in listing order across all pages
    pub quotes: Vec<QuoteRecord>,

    /// Deduplicated author profile URLs, frozen for the fan-out phase
    pub author_urls: HashSet<Url>,

    /// Listing pages that yielded at least one quote
    pub pages_crawled: u32,
}

/// Walks the listing pages and collects quotes plus author profile URLs
///
/// Stops at the first non-success status or the first zero-quote page. Any
/// transport or extraction failure fails the whole phase.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `crawl` - The crawl target configuration
///
/// # Returns
///
/// * `Ok(PaginationResult)` - The walk reached its natural end
/// * `Err(QuoteryError)` - A page could not be fetched or extracted
pub async fn collect_quotes(client: &Client, crawl: &CrawlConfig) -> Result<PaginationResult> {
    let base = Url::parse(&crawl.base_url)?;
    let author_base = Url::parse(&crawl.author_base_url)?;

    let mut quotes = Vec::new();
    let mut author_urls = HashSet::new();
    let mut pages_crawled = 0;

    let mut pages = Paginator::new(client, base);
    while let Some(page) = pages.next_page().await? {
        let extract = extract_quotes(&page.body, &author_base)?;
        if extract.quotes.is_empty() {
            tracing::info!("No quotes on {}, stopping", page.url);
            break;
        }

        pages_crawled += 1;
        author_urls.extend(extract.author_urls);
        quotes.extend(extract.quotes);
        tracing::info!("Page parsed: {}", page.url);
    }

    tracing::info!(
        "Pagination complete: {} quotes and {} author URLs from {} pages",
        quotes.len(),
        author_urls.len(),
        pages_crawled
    );

    Ok(PaginationResult {
        quotes,
        author_urls,
        pages_crawled,
    })
}

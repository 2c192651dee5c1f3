//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawl, including:
//! - Building the shared HTTP client with the configured user agent
//! - GET requests for listing pages, where a non-success status is a normal
//!   end-of-pagination signal rather than an error
//! - GET requests for author profile pages, where any non-success status is
//!   a hard failure

use crate::config::CrawlConfig;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User agent sent when the configuration does not override it
pub const DEFAULT_USER_AGENT: &str = concat!("quotery/", env!("CARGO_PKG_VERSION"));

/// Fetch-specific errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} for {url}")]
    Status { url: String, status: u16 },
}

/// Result of fetching one listing page
#[derive(Debug)]
pub enum ListingFetch {
    /// 2xx response; body is ready for quote extraction
    Content { body: String },

    /// Non-success status: the pagination walk is over
    EndOfPages { status: u16 },
}

/// Builds the HTTP client shared by both crawl phases
///
/// The client keeps a connection pool, so cloning it for concurrent tasks
/// reuses the same pool.
///
/// # Arguments
///
/// * `config` - The crawl target configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use quotery::config::CrawlConfig;
/// use quotery::crawl::build_http_client;
///
/// let config = CrawlConfig {
///     base_url: "https://quotes.toscrape.com".to_string(),
///     author_base_url: "http://quotes.toscrape.com".to_string(),
///     user_agent: None,
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &CrawlConfig) -> Result<Client, reqwest::Error> {
    let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one listing page
///
/// Transport failures are errors; a non-success status is not. The listing
/// walk probes past the last page, so a 404 there is the expected outcome.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The listing page URL
///
/// # Returns
///
/// * `Ok(ListingFetch::Content)` - 2xx response with its body
/// * `Ok(ListingFetch::EndOfPages)` - Any non-success status
/// * `Err(FetchError)` - The request itself failed
pub async fn fetch_listing_page(client: &Client, url: &Url) -> Result<ListingFetch, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Ok(ListingFetch::EndOfPages {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(ListingFetch::Content { body })
}

/// Fetches one author profile page
///
/// Unlike listing pages, every profile URL came from a quote block, so a
/// non-success status is a failure.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - The profile page URL
///
/// # Returns
///
/// * `Ok(String)` - The profile page body
/// * `Err(FetchError)` - The request failed or returned a non-success status
pub async fn fetch_author_page(client: &Client, url: &Url) -> Result<String, FetchError> {
    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| FetchError::Http {
        url: url.to_string(),
        source,
    })
}

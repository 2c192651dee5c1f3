//! Crawl module for the two-phase quotes crawl
//!
//! This module contains the crawl machinery, including:
//! - HTTP client construction and page fetching
//! - Sequential listing pagination
//! - Concurrent author profile fan-out
//! - Overall crawl orchestration
//!
//! The two phases never overlap: pagination runs to completion and hands the
//! collected author URL set to the fan-out by value.

mod fanout;
mod fetcher;
mod orchestrator;
mod pagination;

pub use fanout::fetch_authors;
pub use fetcher::{
    build_http_client, fetch_author_page, fetch_listing_page, FetchError, ListingFetch,
    DEFAULT_USER_AGENT,
};
pub use orchestrator::{run_crawl, CrawlReport};
pub use pagination::{collect_quotes, page_url, FetchedPage, PaginationResult, Paginator};

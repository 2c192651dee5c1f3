//! Concurrent author profile fan-out
//!
//! Once pagination has drained, every collected profile URL is fetched at
//! the same time: one task per URL, no cap. The first task failure aborts
//! the rest and the crawl keeps none of the author results.

use crate::crawl::fetcher::fetch_author_page;
use crate::extract::{extract_author, AuthorRecord};
use crate::{QuoteryError, Result};
use reqwest::Client;
use std::collections::HashSet;
use tokio::task::JoinSet;
use url::Url;

/// Fetches every author profile URL concurrently and extracts the records
///
/// Results are aggregated in completion order, so the returned vector
/// carries no particular ordering. Profile pages without a details block are
/// skipped; any fetch or extraction failure fails the whole operation.
///
/// # Arguments
///
/// * `client` - The shared HTTP client; each task gets a clone backed by the
///   same connection pool
/// * `author_urls` - The frozen URL set collected during pagination
///
/// # Returns
///
/// * `Ok(Vec<AuthorRecord>)` - Every profile fetched and extracted
/// * `Err(QuoteryError)` - The first failure among the tasks
pub async fn fetch_authors(
    client: &Client,
    author_urls: HashSet<Url>,
) -> Result<Vec<AuthorRecord>> {
    let total = author_urls.len();
    let mut tasks = JoinSet::new();

    for url in author_urls {
        let client = client.clone();
        tasks.spawn(async move {
            let body = fetch_author_page(&client, &url).await?;
            match extract_author(&body)? {
                Some(author) => {
                    tracing::debug!("Author parsed: {}", url);
                    Ok::<Option<AuthorRecord>, QuoteryError>(Some(author))
                }
                None => {
                    tracing::warn!("No author details on {}, skipping", url);
                    Ok(None)
                }
            }
        });
    }

    let mut authors = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        // The first error propagates; dropping the set aborts the tasks
        // still in flight
        if let Some(author) = joined?? {
            authors.push(author);
        }
    }

    tracing::info!(
        "Fan-out complete: {} author profiles from {} URLs",
        authors.len(),
        total
    );

    Ok(authors)
}

//! Crawl orchestration
//!
//! Ties the two phases together: sequential pagination first, then the
//! author fan-out over the URL set pagination collected. The set is complete
//! before the first profile fetch starts; handing it to the fan-out by value
//! is the barrier between the phases.

use crate::config::Config;
use crate::crawl::fanout::fetch_authors;
use crate::crawl::fetcher::build_http_client;
use crate::crawl::pagination::collect_quotes;
use crate::extract::{AuthorRecord, QuoteRecord};
use crate::Result;
use std::time::{Duration, Instant};

/// Outcome of a completed crawl
#[derive(Debug)]
pub struct CrawlReport {
    /// Quotes in listing order
    pub quotes: Vec<QuoteRecord>,

    /// Author profiles in completion order
    pub authors: Vec<AuthorRecord>,

    /// Listing pages that yielded quotes
    pub pages_crawled: u32,

    /// Wall-clock time for both phases
    pub elapsed: Duration,
}

/// Runs the full two-phase crawl
///
/// # Arguments
///
/// * `config` - The loaded configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Both phases completed
/// * `Err(QuoteryError)` - A listing page, profile page, or extraction failed
///
/// # Example
///
/// ```no_run
/// use quotery::config::load_config;
/// use quotery::crawl::run_crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let report = run_crawl(&config).await?;
/// println!("{} quotes, {} authors", report.quotes.len(), report.authors.len());
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: &Config) -> Result<CrawlReport> {
    let client = build_http_client(&config.crawl)?;
    let start_time = Instant::now();

    tracing::info!("Starting crawl at {}", config.crawl.base_url);
    let pagination = collect_quotes(&client, &config.crawl).await?;

    // Pagination has fully drained; the URL set moves to the fan-out by value
    let authors = fetch_authors(&client, pagination.author_urls).await?;

    let elapsed = start_time.elapsed();
    tracing::info!(
        "Crawl completed: {} quotes and {} authors from {} pages in {:?}",
        pagination.quotes.len(),
        authors.len(),
        pagination.pages_crawled,
        elapsed
    );

    Ok(CrawlReport {
        quotes: pagination.quotes,
        authors,
        pages_crawled: pagination.pages_crawled,
        elapsed,
    })
}

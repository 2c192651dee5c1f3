//! Quotery: a two-phase crawler for paginated quote sites
//!
//! This crate walks a site's listing pages one by one, collecting quotes and
//! the set of author profile URLs they link to, then fetches every profile
//! concurrently. Results are exported as JSON and can be seeded into a
//! SQLite database for downstream queries.

pub mod config;
pub mod crawl;
pub mod extract;
pub mod output;
pub mod storage;

use thiserror::Error;

/// Main error type for Quotery operations
#[derive(Debug, Error)]
pub enum QuoteryError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] crawl::FetchError),

    #[error("Extraction error: {0}")]
    Extract(#[from] extract::ExtractError),

    #[error("Export error: {0}")]
    Export(#[from] output::ExportError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage error: {0}")]
    Store(#[from] storage::StoreError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Author task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Quotery operations
pub type Result<T> = std::result::Result<T, QuoteryError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawl::{run_crawl, CrawlReport};
pub use extract::{AuthorRecord, QuoteRecord};
pub use storage::{AuthorLookup, SeedReport, SqliteStore, Store};

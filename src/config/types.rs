use serde::Deserialize;

/// Main configuration structure for Quotery
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub output: OutputConfig,
}

/// Crawl target configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// Base URL of the quotes listing; page 1 is this URL itself
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Base URL that relative author profile links are resolved against
    #[serde(rename = "author-base-url")]
    pub author_base_url: String,

    /// User agent header sent with every request; defaults to "quotery/<version>"
    #[serde(rename = "user-agent", default)]
    pub user_agent: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path the quotes JSON export is written to and seeded from
    #[serde(rename = "quotes-path")]
    pub quotes_path: String,

    /// Path the authors JSON export is written to and seeded from
    #[serde(rename = "authors-path")]
    pub authors_path: String,

    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

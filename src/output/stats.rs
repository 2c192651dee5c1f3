//! Statistics reporting from the seeded database
//!
//! This module provides functionality for extracting and displaying record
//! counts from the storage layer.

use crate::storage::Store;
use crate::Result;

/// Seeded database statistics summary
#[derive(Debug, Clone)]
pub struct StoreStats {
    /// Total authors stored
    pub authors: u64,

    /// Total quotes stored
    pub quotes: u64,

    /// Quotes whose author name matched no stored author
    pub unlinked_quotes: u64,
}

/// Loads statistics from the store
///
/// # Arguments
///
/// * `store` - The storage backend to query
///
/// # Returns
///
/// * `Ok(StoreStats)` - Successfully loaded statistics
/// * `Err(QuoteryError)` - Failed to query statistics
pub fn load_store_stats(store: &dyn Store) -> Result<StoreStats> {
    let authors = store.count_authors()?;
    let quotes = store.count_quotes()?;
    let unlinked_quotes = store.count_unlinked_quotes()?;

    Ok(StoreStats {
        authors,
        quotes,
        unlinked_quotes,
    })
}

/// Prints statistics to stdout in a formatted manner
///
/// # Arguments
///
/// * `stats` - The statistics to display
pub fn print_store_stats(stats: &StoreStats) {
    println!("=== Store Statistics ===\n");

    println!("Overview:");
    println!("  Authors: {}", stats.authors);
    println!("  Quotes: {}", stats.quotes);
    println!();

    let linked = stats.quotes.saturating_sub(stats.unlinked_quotes);
    let link_rate = if stats.quotes > 0 {
        (linked as f64 / stats.quotes as f64) * 100.0
    } else {
        0.0
    };

    println!(
        "Author Links: {:.1}% ({} / {} quotes linked to a stored author)",
        link_rate, linked, stats.quotes
    );

    if stats.unlinked_quotes > 0 {
        println!("  {} quotes have no matching author", stats.unlinked_quotes);
    }
}

//! Database seeding from JSON exports
//!
//! Seeding replaces the store contents wholesale: authors first, then quotes,
//! each quote joined to its author row by exact display name. A quote whose
//! author name matches nothing is still inserted, just without the link.

use crate::extract::{AuthorRecord, QuoteRecord};
use crate::output::read_records;
use crate::storage::{AuthorLookup, Store};
use crate::Result;
use std::path::Path;

/// Outcome of a completed seeding run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Author rows inserted
    pub authors_inserted: u64,

    /// Quote rows inserted
    pub quotes_inserted: u64,

    /// Quotes inserted without an author link
    pub quotes_unlinked: u64,
}

/// Seeds the store from the JSON export files
///
/// Reads both exports before touching the store, clears the store, inserts
/// every author, then inserts every quote with its author link resolved by
/// exact name.
///
/// # Arguments
///
/// * `store` - The storage backend to seed
/// * `quotes_path` - The quotes JSON export
/// * `authors_path` - The authors JSON export
///
/// # Returns
///
/// * `Ok(SeedReport)` - Counts of what was inserted
/// * `Err(QuoteryError)` - A file could not be read or a row not inserted
pub fn seed_store(
    store: &mut dyn Store,
    quotes_path: &Path,
    authors_path: &Path,
) -> Result<SeedReport> {
    let authors: Vec<AuthorRecord> = read_records(authors_path)?;
    let quotes: Vec<QuoteRecord> = read_records(quotes_path)?;

    store.clear_all()?;

    for author in &authors {
        store.insert_author(author)?;
    }
    tracing::info!("Seeded {} authors", authors.len());

    let mut quotes_unlinked = 0;
    for quote in &quotes {
        match store.find_author_by_name(&quote.author)? {
            AuthorLookup::Found(author_id) => {
                store.insert_quote(quote, Some(author_id))?;
            }
            AuthorLookup::NotFound => {
                tracing::warn!(
                    "No stored author named '{}', quote inserted without a link",
                    quote.author
                );
                store.insert_quote(quote, None)?;
                quotes_unlinked += 1;
            }
        }
    }
    tracing::info!(
        "Seeded {} quotes ({} without an author link)",
        quotes.len(),
        quotes_unlinked
    );

    Ok(SeedReport {
        authors_inserted: authors.len() as u64,
        quotes_inserted: quotes.len() as u64,
        quotes_unlinked,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::write_records;
    use crate::storage::SqliteStore;
    use tempfile::TempDir;

    fn write_exports(
        dir: &TempDir,
        quotes: &[QuoteRecord],
        authors: &[AuthorRecord],
    ) -> (std::path::PathBuf, std::path::PathBuf) {
        let quotes_path = dir.path().join("quotes.json");
        let authors_path = dir.path().join("authors.json");
        write_records(&quotes_path, quotes).unwrap();
        write_records(&authors_path, authors).unwrap();
        (quotes_path, authors_path)
    }

    fn author(name: &str) -> AuthorRecord {
        AuthorRecord {
            full_name: name.to_string(),
            born_date: "January 01, 1900".to_string(),
            born_location: "in Testville".to_string(),
            description: "A test author.".to_string(),
        }
    }

    fn quote(text: &str, author: &str) -> QuoteRecord {
        QuoteRecord {
            text: text.to_string(),
            author: author.to_string(),
            tags: vec!["test".to_string()],
        }
    }

    #[test]
    fn test_seed_links_quotes_by_exact_name() {
        let dir = TempDir::new().unwrap();
        let (quotes_path, authors_path) = write_exports(
            &dir,
            &[quote("Q1", "Jane Doe"), quote("Q2", "Jane Doe")],
            &[author("Jane Doe")],
        );
        let mut store = SqliteStore::new_in_memory().unwrap();

        let report = seed_store(&mut store, &quotes_path, &authors_path).unwrap();

        assert_eq!(report.authors_inserted, 1);
        assert_eq!(report.quotes_inserted, 2);
        assert_eq!(report.quotes_unlinked, 0);

        let stored = store.list_quotes().unwrap();
        assert!(stored.iter().all(|q| q.author_id.is_some()));
    }

    #[test]
    fn test_unmatched_author_inserts_unlinked_quote() {
        let dir = TempDir::new().unwrap();
        let (quotes_path, authors_path) = write_exports(
            &dir,
            &[quote("Q1", "Jane Doe"), quote("Q2", "Missing Person")],
            &[author("Jane Doe")],
        );
        let mut store = SqliteStore::new_in_memory().unwrap();

        let report = seed_store(&mut store, &quotes_path, &authors_path).unwrap();

        assert_eq!(report.quotes_inserted, 2);
        assert_eq!(report.quotes_unlinked, 1);
        assert_eq!(store.count_unlinked_quotes().unwrap(), 1);
    }

    #[test]
    fn test_reseed_replaces_existing_rows() {
        let dir = TempDir::new().unwrap();
        let (quotes_path, authors_path) = write_exports(
            &dir,
            &[quote("Q1", "Jane Doe")],
            &[author("Jane Doe")],
        );
        let mut store = SqliteStore::new_in_memory().unwrap();

        seed_store(&mut store, &quotes_path, &authors_path).unwrap();
        seed_store(&mut store, &quotes_path, &authors_path).unwrap();

        assert_eq!(store.count_authors().unwrap(), 1);
        assert_eq!(store.count_quotes().unwrap(), 1);
    }

    #[test]
    fn test_missing_export_leaves_store_untouched() {
        let dir = TempDir::new().unwrap();
        let (quotes_path, authors_path) = write_exports(
            &dir,
            &[quote("Q1", "Jane Doe")],
            &[author("Jane Doe")],
        );
        let mut store = SqliteStore::new_in_memory().unwrap();
        seed_store(&mut store, &quotes_path, &authors_path).unwrap();

        let absent = dir.path().join("absent.json");
        let result = seed_store(&mut store, &absent, &authors_path);

        assert!(result.is_err());
        assert_eq!(store.count_quotes().unwrap(), 1);
        assert_eq!(store.count_authors().unwrap(), 1);
    }
}

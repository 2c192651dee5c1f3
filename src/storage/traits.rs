//! Storage traits and error types
//!
//! This module defines the trait interface for storage backends and
//! associated error types.

use crate::extract::{AuthorRecord, QuoteRecord};
use crate::storage::{AuthorLookup, StoredQuote};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for storage backend implementations
///
/// This trait defines all database operations the seeding step and the
/// statistics report need.
pub trait Store {
    // ===== Seeding =====

    /// Deletes every stored quote and author
    fn clear_all(&mut self) -> StoreResult<()>;

    /// Inserts an author row
    ///
    /// # Arguments
    ///
    /// * `author` - The author record to insert
    ///
    /// # Returns
    ///
    /// The row id of the inserted author
    fn insert_author(&mut self, author: &AuthorRecord) -> StoreResult<i64>;

    /// Inserts a quote row with its tags
    ///
    /// `author_id` is the resolved author row, or `None` when the name join
    /// found nothing. Tag positions record the listing order.
    ///
    /// # Returns
    ///
    /// The row id of the inserted quote
    fn insert_quote(&mut self, quote: &QuoteRecord, author_id: Option<i64>) -> StoreResult<i64>;

    // ===== Lookup =====

    /// Resolves an author display name to a stored author row
    ///
    /// When several rows carry the same name, the oldest row wins.
    fn find_author_by_name(&self, full_name: &str) -> StoreResult<AuthorLookup>;

    /// Gets an author row by id
    fn get_author(&self, author_id: i64) -> StoreResult<Option<AuthorRecord>>;

    /// Gets all stored quotes with their tags, in insertion order
    fn list_quotes(&self) -> StoreResult<Vec<StoredQuote>>;

    // ===== Statistics =====

    /// Counts stored authors
    fn count_authors(&self) -> StoreResult<u64>;

    /// Counts stored quotes
    fn count_quotes(&self) -> StoreResult<u64>;

    /// Counts stored quotes without an author link
    fn count_unlinked_quotes(&self) -> StoreResult<u64>;
}

//! Storage module for persisting seeded records
//!
//! This module handles all database operations for the seeding boundary,
//! including:
//! - SQLite database initialization and schema management
//! - Author and quote persistence with the author-name join
//! - Record counting for statistics

mod schema;
mod seeder;
mod sqlite;
mod traits;

pub use seeder::{seed_store, SeedReport};
pub use sqlite::SqliteStore;
pub use traits::{Store, StoreError, StoreResult};

use crate::QuoteryError;
use std::path::Path;

/// Initializes or opens a storage database
///
/// # Arguments
///
/// * `path` - Path to the SQLite database file
///
/// # Returns
///
/// * `Ok(SqliteStore)` - Successfully initialized storage
/// * `Err(QuoteryError)` - Failed to initialize storage
pub fn open_store(path: &Path) -> Result<SqliteStore, QuoteryError> {
    SqliteStore::new(path)
}

/// Represents a quote row in the database
#[derive(Debug, Clone)]
pub struct StoredQuote {
    pub id: i64,
    pub text: String,
    pub author_id: Option<i64>,
    pub tags: Vec<String>,
}

/// Outcome of resolving a quote's author display name in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorLookup {
    /// The name matched a stored author row
    Found(i64),

    /// No stored author carries this name
    NotFound,
}

impl AuthorLookup {
    /// The matched row id, if any
    pub fn id(self) -> Option<i64> {
        match self {
            Self::Found(id) => Some(id),
            Self::NotFound => None,
        }
    }
}

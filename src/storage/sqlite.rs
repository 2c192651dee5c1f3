//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the Store trait.

use crate::extract::{AuthorRecord, QuoteRecord};
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Store, StoreResult};
use crate::storage::{AuthorLookup, StoredQuote};
use crate::QuoteryError;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Creates a new SqliteStore instance
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(QuoteryError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, QuoteryError> {
        let conn = Connection::open(path)?;

        // Configure SQLite for better performance
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA foreign_keys = ON;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        // Initialize schema
        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, QuoteryError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Store for SqliteStore {
    // ===== Seeding =====

    fn clear_all(&mut self) -> StoreResult<()> {
        // Tag rows cascade from the quote delete
        self.conn.execute("DELETE FROM quotes", [])?;
        self.conn.execute("DELETE FROM authors", [])?;
        Ok(())
    }

    fn insert_author(&mut self, author: &AuthorRecord) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO authors (full_name, born_date, born_location, description)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                author.full_name,
                author.born_date,
                author.born_location,
                author.description
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn insert_quote(&mut self, quote: &QuoteRecord, author_id: Option<i64>) -> StoreResult<i64> {
        self.conn.execute(
            "INSERT INTO quotes (text, author_id) VALUES (?1, ?2)",
            params![quote.text, author_id],
        )?;
        let quote_id = self.conn.last_insert_rowid();

        for (position, tag) in quote.tags.iter().enumerate() {
            self.conn.execute(
                "INSERT INTO quote_tags (quote_id, position, tag) VALUES (?1, ?2, ?3)",
                params![quote_id, position as i64, tag],
            )?;
        }

        Ok(quote_id)
    }

    // ===== Lookup =====

    fn find_author_by_name(&self, full_name: &str) -> StoreResult<AuthorLookup> {
        let id: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM authors WHERE full_name = ?1 ORDER BY id LIMIT 1",
                params![full_name],
                |row| row.get(0),
            )
            .optional()?;

        Ok(match id {
            Some(id) => AuthorLookup::Found(id),
            None => AuthorLookup::NotFound,
        })
    }

    fn get_author(&self, author_id: i64) -> StoreResult<Option<AuthorRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT full_name, born_date, born_location, description
             FROM authors WHERE id = ?1",
        )?;

        let author = stmt
            .query_row(params![author_id], |row| {
                Ok(AuthorRecord {
                    full_name: row.get(0)?,
                    born_date: row.get(1)?,
                    born_location: row.get(2)?,
                    description: row.get(3)?,
                })
            })
            .optional()?;

        Ok(author)
    }

    fn list_quotes(&self) -> StoreResult<Vec<StoredQuote>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text, author_id FROM quotes ORDER BY id")?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut tag_stmt = self
            .conn
            .prepare("SELECT tag FROM quote_tags WHERE quote_id = ?1 ORDER BY position")?;

        let mut quotes = Vec::with_capacity(rows.len());
        for (id, text, author_id) in rows {
            let tags = tag_stmt
                .query_map(params![id], |row| row.get(0))?
                .collect::<Result<Vec<String>, _>>()?;

            quotes.push(StoredQuote {
                id,
                text,
                author_id,
                tags,
            });
        }

        Ok(quotes)
    }

    // ===== Statistics =====

    fn count_authors(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM authors", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_quotes(&self) -> StoreResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn count_unlinked_quotes(&self) -> StoreResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM quotes WHERE author_id IS NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

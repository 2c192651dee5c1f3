//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Quotery database.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Seeded author profiles
CREATE TABLE IF NOT EXISTS authors (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    full_name TEXT NOT NULL,
    born_date TEXT NOT NULL,
    born_location TEXT NOT NULL,
    description TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_authors_full_name ON authors(full_name);

-- Seeded quotes; author_id stays NULL when the name join found no author
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL,
    author_id INTEGER REFERENCES authors(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes(author_id);

-- Tag labels per quote, kept in listing order by position
CREATE TABLE IF NOT EXISTS quote_tags (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    quote_id INTEGER NOT NULL REFERENCES quotes(id) ON DELETE CASCADE,
    position INTEGER NOT NULL,
    tag TEXT NOT NULL,
    UNIQUE(quote_id, position)
);

CREATE INDEX IF NOT EXISTS idx_quote_tags_quote ON quote_tags(quote_id);
"#;

/// Initializes the database schema
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Returns
///
/// * `Ok(())` - Schema initialized successfully
/// * `Err(rusqlite::Error)` - Failed to initialize schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

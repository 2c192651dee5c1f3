//! JSON export and import
//!
//! Exports are pretty-printed with four-space indentation and keep non-ASCII
//! text unescaped, so the files read exactly as the site published them. The
//! seeding step reads the same files back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Export-specific errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes records to `path` as a pretty-printed JSON array
///
/// An empty slice writes an empty array rather than skipping the file, so a
/// crawl that found nothing still leaves well-formed exports behind.
///
/// # Arguments
///
/// * `path` - Destination file, created or truncated
/// * `records` - The records to serialize
///
/// # Returns
///
/// * `Ok(())` - File written and flushed
/// * `Err(ExportError)` - The file could not be written or serialized
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    // Four-space indentation, matching the export format downstream
    // tooling expects
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut writer, formatter);
    records.serialize(&mut serializer)?;

    writer.flush()?;
    Ok(())
}

/// Reads a JSON array of records back from `path`
///
/// # Arguments
///
/// * `path` - Source file holding a JSON array
///
/// # Returns
///
/// * `Ok(Vec<T>)` - All records deserialized
/// * `Err(ExportError)` - The file was missing or not a valid array
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ExportError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let records = serde_json::from_reader(reader)?;
    Ok(records)
}

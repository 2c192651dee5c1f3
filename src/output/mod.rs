//! Output module for exports and reporting
//!
//! This module handles:
//! - The JSON export boundary between the crawl and the seeding step
//! - Statistics reporting from the seeded database

mod json;
mod stats;

pub use json::{read_records, write_records, ExportError};
pub use stats::{load_store_stats, print_store_stats, StoreStats};

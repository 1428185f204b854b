//! Account file loading.
//!
//! This module provides utilities for:
//! - Reading the accounts JSON file at startup
//! - Seeding an [`AccountRegistry`] from it

pub use crate::error::LoadError;
use crate::{models::account::AccountRecord, services::registry::AccountRegistry};
use std::{fs::File, io::BufReader, path::Path};

/// Read account records from a JSON file.
///
/// # File Format
///
/// ```json
/// [
///   { "name": "Mark", "balance": 100 },
///   { "name": "Jane", "balance": 50 }
/// ]
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The contents are not a JSON array of records
pub fn read_accounts(path: impl AsRef<Path>) -> Result<Vec<AccountRecord>, LoadError> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;

    Ok(records)
}

/// Read the accounts file and build a registry from it.
///
/// Fails with `NegativeBalance` if any record starts below zero.
pub fn load_registry(path: impl AsRef<Path>) -> Result<AccountRegistry, LoadError> {
    let records = read_accounts(path)?;
    AccountRegistry::with_accounts(records)
}

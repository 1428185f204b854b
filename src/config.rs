//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `ACCOUNTS_FILE` (optional): JSON file with the initial accounts, defaults to `accounts.json`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_accounts_file")]
    pub accounts_file: PathBuf,

    #[serde(default = "default_port")]
    pub server_port: u16,
}

fn default_accounts_file() -> PathBuf {
    PathBuf::from("accounts.json")
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed
    /// (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from arbitrary `(KEY, value)` pairs.
    ///
    /// Field names map to upper-case keys: accounts_file -> ACCOUNTS_FILE.
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
    }
}

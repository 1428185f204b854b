//! Account data models and API response types.
//!
//! This module defines:
//! - `Account`: In-memory account entity with its own balance guard
//! - `AccountRecord`: One entry of the accounts file, used to seed the registry
//! - `AccountResponse`: Response body returned to clients

use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Normalize an account name into its registry identity.
///
/// Identities are case-insensitive, so every lookup and every lock-order
/// comparison goes through this function.
pub fn normalize_identity(name: &str) -> String {
    name.to_lowercase()
}

/// A named balance guarded by its own mutex.
///
/// # Balance Storage
///
/// Balances are stored as `i64` in the currency's smallest unit (cents),
/// never as floats. The balance is only reachable through `Account::lock`,
/// so every read and write happens under this account's guard.
///
/// # Invariant
///
/// The balance is never negative. The registry rejects negative seeds and
/// the transfer service only debits after checking funds under the guard.
/// Accounts are only created by the registry.
#[derive(Debug)]
pub struct Account {
    /// Name exactly as it appeared in the accounts file (e.g. "Mark")
    name: String,

    /// Lowercased name, the registry key and lock-order key
    identity: String,

    balance: Mutex<i64>,
}

impl Account {
    pub(crate) fn new(name: impl Into<String>, balance: i64) -> Self {
        let name = name.into();
        let identity = normalize_identity(&name);

        Self {
            name,
            identity,
            balance: Mutex::new(balance),
        }
    }

    /// Display name, as loaded.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Acquire this account's exclusive guard.
    ///
    /// A poisoned guard is recovered: balances are only written once every
    /// check has passed, so a panic while holding the guard cannot leave a
    /// half-applied transfer behind.
    pub(crate) fn lock(&self) -> MutexGuard<'_, i64> {
        self.balance.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current balance, read under the guard.
    pub fn balance(&self) -> i64 {
        *self.lock()
    }

    pub fn snapshot(&self) -> AccountResponse {
        AccountResponse {
            name: self.name.clone(),
            balance: self.balance(),
        }
    }
}

/// One account entry from the accounts file.
///
/// # JSON Example
///
/// ```json
/// { "name": "Mark", "balance": 100 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub name: String,
    pub balance: i64,
}

impl AccountRecord {
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// { "name": "Mark", "balance": 70 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub name: String,
    pub balance: i64,
}

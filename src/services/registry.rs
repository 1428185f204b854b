//! Account registry - the set of accounts the service can move money between.
//!
//! # Locking
//!
//! The registry map sits behind a `RwLock`: the write side is taken only by
//! [`AccountRegistry::load`], every lookup takes the read side. Lookups hand
//! back an `Arc<Account>` and release the registry lock before returning, so
//! the registry lock is never held while an account guard is held.

use crate::{
    error::LoadError,
    models::account::{Account, AccountRecord, AccountResponse, normalize_identity},
};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

/// Shared handle to the registry.
///
/// Cloned into every handler via axum state.
pub type SharedRegistry = Arc<AccountRegistry>;

/// Owning map from lowercased identity to account.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: RwLock<HashMap<String, Arc<Account>>>,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry seeded with `records`.
    pub fn with_accounts<I>(records: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = AccountRecord>,
    {
        let registry = Self::new();
        registry.load(records)?;
        Ok(registry)
    }

    /// Insert one account per record under the write lock.
    ///
    /// Keys are lowercased; a later record with the same identity replaces
    /// the earlier one. Must complete before transfer traffic starts.
    ///
    /// # Errors
    ///
    /// `NegativeBalance` if any record starts below zero. Nothing is
    /// inserted in that case.
    pub fn load<I>(&self, records: I) -> Result<(), LoadError>
    where
        I: IntoIterator<Item = AccountRecord>,
    {
        let records: Vec<AccountRecord> = records.into_iter().collect();
        if let Some(record) = records.iter().find(|record| record.balance < 0) {
            return Err(LoadError::NegativeBalance {
                name: record.name.clone(),
                balance: record.balance,
            });
        }

        let mut accounts = self.accounts.write().unwrap_or_else(PoisonError::into_inner);
        for record in records {
            let account = Account::new(record.name, record.balance);
            accounts.insert(account.identity().to_string(), Arc::new(account));
        }
        Ok(())
    }

    /// Find an account by case-insensitive name.
    ///
    /// Only the registry read lock is taken; the account itself is not locked.
    pub fn lookup(&self, name: &str) -> Option<Arc<Account>> {
        self.read().get(&normalize_identity(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(&normalize_identity(name))
    }

    /// Read-only view of one account's balance.
    pub fn snapshot(&self, name: &str) -> Option<AccountResponse> {
        self.lookup(name).map(|account| account.snapshot())
    }

    /// Views of every account, sorted by identity.
    ///
    /// Each balance is read under its own guard, so the list is not a
    /// consistent cut across accounts while transfers are in flight.
    pub fn snapshots(&self) -> Vec<AccountResponse> {
        let mut accounts: Vec<Arc<Account>> = self.read().values().cloned().collect();
        accounts.sort_by(|a, b| a.identity().cmp(b.identity()));
        accounts.iter().map(|account| account.snapshot()).collect()
    }

    /// Sum of all balances.
    pub fn total_balance(&self) -> i128 {
        let accounts: Vec<Arc<Account>> = self.read().values().cloned().collect();
        accounts
            .iter()
            .map(|account| i128::from(account.balance()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<Account>>> {
        self.accounts.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> AccountRegistry {
        AccountRegistry::with_accounts([
            AccountRecord::new("Mark", 100),
            AccountRecord::new("Jane", 50),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = registry();

        let lower = registry.lookup("mark").unwrap();
        let upper = registry.lookup("MARK").unwrap();
        assert!(Arc::ptr_eq(&lower, &upper));
        assert_eq!(lower.name(), "Mark");
        assert!(registry.lookup("unknown").is_none());
    }

    #[test]
    fn test_load_last_write_wins() {
        let registry = registry();
        registry.load([AccountRecord::new("MARK", 7)]).unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.snapshot("mark"),
            Some(AccountResponse {
                name: "MARK".to_string(),
                balance: 7
            })
        );
    }

    #[test]
    fn test_negative_seed_is_rejected() {
        let records = [AccountRecord::new("Mark", -5)];
        let err = AccountRegistry::with_accounts(records).unwrap_err();
        assert!(matches!(
            err,
            LoadError::NegativeBalance { balance: -5, .. }
        ));
    }

    #[test]
    fn test_rejected_load_inserts_nothing() {
        let registry = registry();
        let result = registry.load([
            AccountRecord::new("Adam", 10),
            AccountRecord::new("Mark", -1),
        ]);

        assert!(result.is_err());
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup("adam").is_none());
        assert_eq!(registry.lookup("mark").unwrap().balance(), 100);
    }

    #[test]
    fn test_snapshots_sorted_by_identity() {
        let registry = registry();
        let names: Vec<String> = registry
            .snapshots()
            .into_iter()
            .map(|account| account.name)
            .collect();
        assert_eq!(names, vec!["Jane".to_string(), "Mark".to_string()]);
    }

    #[test]
    fn test_total_balance_and_len() {
        let registry = registry();
        assert_eq!(registry.total_balance(), 150);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
        assert!(AccountRegistry::new().is_empty());
        assert!(registry.contains("JaNe"));
    }
}

//! Account store module
//!
//! This module provides the `AccountStore` struct which holds every account
//! for the lifetime of the process and hands out bounds-checked access by
//! account number.
//!
//! The store is an ordered sequence: an account's number equals its position
//! at insertion time, accounts are never removed or reordered, so the
//! number-equals-index invariant holds for the life of the store. Restoring
//! from a snapshot re-validates that invariant before accepting the data.

use crate::types::{Account, AccountKind, AccountNumber, LedgerError};
use rust_decimal::Decimal;

/// Ordered, append-only collection of all accounts
///
/// The store owns every [`Account`] and assigns account numbers sequentially
/// in creation order. Lookups are bounds-checked; an out-of-range number
/// yields [`LedgerError::AccountNotFound`] and never mutates the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountStore {
    /// Accounts in creation order; index == account number
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: Vec::new(),
        }
    }

    /// Rebuild a store from restored accounts
    ///
    /// Validates the number-equals-index invariant that every later lookup
    /// depends on.
    ///
    /// # Returns
    ///
    /// * `Ok(AccountStore)` - If every account's number equals its position
    /// * `Err(LedgerError)` - [`LedgerError::SnapshotCorrupt`] naming the
    ///   first mismatching entry
    pub fn from_accounts(accounts: Vec<Account>) -> Result<Self, LedgerError> {
        for (position, account) in accounts.iter().enumerate() {
            if account.number as usize != position {
                return Err(LedgerError::snapshot_corrupt(format!(
                    "account {} recorded at position {}",
                    account.number, position
                )));
            }
        }
        Ok(AccountStore { accounts })
    }

    /// Open a new account
    ///
    /// Assigns the next sequential account number (the current store length)
    /// and appends the account. Numbers are never reused or reassigned.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name, accepted as-is
    /// * `balance` - Initial balance, accepted as-is (no sign check)
    /// * `kind` - Savings or Current, fixed for the account's life
    ///
    /// # Returns
    ///
    /// A reference to the newly created account.
    pub fn open(&mut self, name: impl Into<String>, balance: Decimal, kind: AccountKind) -> &Account {
        let number = self.accounts.len() as AccountNumber;
        self.accounts.push(Account::new(number, name, balance, kind));
        // Just pushed, so last() cannot be empty
        self.accounts.last().unwrap()
    }

    /// Look up an account by number
    pub fn get(&self, number: AccountNumber) -> Result<&Account, LedgerError> {
        self.accounts
            .get(number as usize)
            .ok_or(LedgerError::AccountNotFound { number })
    }

    /// Look up an account by number for mutation
    pub fn get_mut(&mut self, number: AccountNumber) -> Result<&mut Account, LedgerError> {
        self.accounts
            .get_mut(number as usize)
            .ok_or(LedgerError::AccountNotFound { number })
    }

    /// All accounts in insertion order
    ///
    /// Used for the summary report and for snapshot writing; the order is
    /// the creation order, which also sorts by account number.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Number of accounts in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

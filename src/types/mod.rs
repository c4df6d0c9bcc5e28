//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account entity and the two account kinds
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountKind, AccountNumber};
pub use error::LedgerError;

//! Rust Bank Ledger Library
//! # Overview
//!
//! This library provides an interactive, menu-driven ledger over a small set
//! of bank accounts held in memory, with whole-store snapshots to disk.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, AccountKind, errors)
//! - [`cli`] - CLI argument parsing and the interactive menu session
//! - [`core`] - Business logic components:
//!   - [`core::store`] - The ordered in-memory account store
//! - [`io`] - Snapshot persistence (CSV load/save of the whole store)
//!
//! # Account Kinds
//!
//! The ledger supports two account kinds, each with its own withdrawal policy:
//!
//! - **Savings**: the balance may never drop below the minimum balance floor
//!   of 500 after a withdrawal
//! - **Current**: the balance may go negative, but never below the overdraft
//!   limit of -10000
//!
//! Deposits are unconditional for both kinds. Account numbers are assigned
//! sequentially in creation order and are stable for the life of the store.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::AccountStore;
pub use cli::Session;
pub use io::{load_snapshot, save_snapshot};
pub use types::{Account, AccountKind, AccountNumber, LedgerError};

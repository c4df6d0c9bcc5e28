//! Error types for the Rust Bank Ledger
//!
//! This module defines all error types that can occur during a ledger session.
//! Errors are designed to be descriptive and user-friendly for CLI output:
//! the `Display` text of a domain error is exactly the message the menu loop
//! prints for it.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: account number outside the store bounds
//! - **Policy Errors**: withdrawal denied by the kind-specific policy
//! - **Selection Errors**: unrecognized account-kind choice during creation
//! - **Snapshot Errors**: unreadable, malformed, or inconsistent snapshot file
//! - **Console Errors**: the interactive input stream ended or failed
//!
//! Every error except [`LedgerError::ConsoleClosed`] and [`LedgerError::Io`]
//! is recoverable: it is reported in-band and the menu loop continues.

use crate::types::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the bank ledger
///
/// This enum represents all possible errors that can occur while running a
/// ledger session. Each variant includes relevant context to help diagnose
/// and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Account number is outside the current store bounds
    ///
    /// This is a recoverable error - the requested operation is aborted,
    /// the store is left untouched, and the menu loop continues.
    #[error("Account does not exist.")]
    AccountNotFound {
        /// The account number that was requested
        number: AccountNumber,
    },

    /// Withdrawal would drop a savings balance below the minimum balance floor
    ///
    /// This is a recoverable error - the withdrawal is rejected and the
    /// balance remains unchanged.
    #[error("Insufficient balance. Minimum balance required: {minimum}")]
    BelowMinimumBalance {
        /// The minimum balance a savings account must retain
        minimum: Decimal,
    },

    /// Withdrawal would push a current balance past the overdraft limit
    ///
    /// This is a recoverable error - the withdrawal is rejected and the
    /// balance remains unchanged.
    #[error("Overdraft limit exceeded. Maximum allowed overdraft: {limit}")]
    OverdraftExceeded {
        /// The largest overdraft a current account may carry
        limit: Decimal,
    },

    /// Unrecognized account-kind choice during account creation
    ///
    /// This is a recoverable error - the add operation is aborted and no
    /// account is created.
    #[error("Invalid account type. Account not created.")]
    InvalidAccountKind {
        /// The choice that was entered
        choice: String,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected to maintain
    /// balance integrity.
    #[error("Arithmetic overflow in {operation} for account {number}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        number: AccountNumber,
    },

    /// Snapshot file exists but cannot be parsed
    ///
    /// This is a recoverable error - the session starts with an empty store
    /// and the message is surfaced to the user.
    #[error("snapshot parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    SnapshotFormat {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Snapshot file parsed but violates a store invariant
    ///
    /// Raised when the recorded account numbers disagree with their positions
    /// in the file. Recoverable - the session starts with an empty store.
    #[error("corrupt snapshot: {message}")]
    SnapshotCorrupt {
        /// Description of the violated invariant
        message: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// The interactive console input stream ended mid-session
    ///
    /// This is the only fatal condition the loop itself raises: with no
    /// console left there is nothing to re-prompt.
    #[error("unexpected end of console input")]
    ConsoleClosed,
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::SnapshotFormat {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountNotFound error
    pub fn account_not_found(number: AccountNumber) -> Self {
        LedgerError::AccountNotFound { number }
    }

    /// Create a BelowMinimumBalance error
    pub fn below_minimum_balance(minimum: Decimal) -> Self {
        LedgerError::BelowMinimumBalance { minimum }
    }

    /// Create an OverdraftExceeded error
    pub fn overdraft_exceeded(limit: Decimal) -> Self {
        LedgerError::OverdraftExceeded { limit }
    }

    /// Create an InvalidAccountKind error
    pub fn invalid_account_kind(choice: &str) -> Self {
        LedgerError::InvalidAccountKind {
            choice: choice.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, number: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            number,
        }
    }

    /// Create a SnapshotCorrupt error
    pub fn snapshot_corrupt(message: impl Into<String>) -> Self {
        LedgerError::SnapshotCorrupt {
            message: message.into(),
        }
    }
}

//! Account-related types for the Rust Bank Ledger
//!
//! This module defines the Account entity, the two account kinds, and the
//! balance-mutation rules (deposit always succeeds, withdrawal is guarded by
//! the kind-specific policy).

use crate::types::error::LedgerError;
use rust_decimal::Decimal;
use std::io::Write;

/// Account identifier
///
/// Equal to the account's position in the store at creation time (0-based)
/// and never reassigned.
pub type AccountNumber = u32;

/// The two account kinds supported by the ledger
///
/// The kind is fixed at creation and selects the withdrawal policy. The set
/// is closed: persistence stores an explicit tag rather than relying on any
/// runtime type information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    /// Savings account
    ///
    /// A withdrawal must not leave the balance below the minimum balance
    /// floor of 500.
    Savings,

    /// Current account
    ///
    /// The balance may go negative, but a withdrawal must not leave it below
    /// the overdraft limit of -10000.
    Current,
}

impl AccountKind {
    /// The lowest balance a withdrawal may leave behind for this kind
    ///
    /// 500 for savings, -10000 for current.
    pub fn withdrawal_floor(self) -> Decimal {
        match self {
            AccountKind::Savings => Decimal::new(500, 0),
            AccountKind::Current => Decimal::new(-10_000, 0),
        }
    }

    /// The tag stored in the snapshot file for this kind
    pub fn as_tag(self) -> &'static str {
        match self {
            AccountKind::Savings => "savings",
            AccountKind::Current => "current",
        }
    }

    /// Parse a snapshot tag back into a kind
    ///
    /// # Returns
    ///
    /// * `Some(kind)` for the known tags `savings` and `current`
    /// * `None` for anything else
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "savings" => Some(AccountKind::Savings),
            "current" => Some(AccountKind::Current),
            _ => None,
        }
    }
}

/// A single bank account
///
/// Holds the stable account number, the mutable display name, the current
/// balance, and the kind that selects the withdrawal policy. Balances use
/// [`Decimal`] throughout; no floating point is involved.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    /// Position in the store at creation time; stable for the account's life
    pub number: AccountNumber,

    /// Display name; mutable, no uniqueness constraint
    pub name: String,

    /// Current balance
    ///
    /// May be negative only for a current account, and only down to the
    /// overdraft limit.
    pub balance: Decimal,

    /// The account kind, fixed at creation
    pub kind: AccountKind,
}

impl Account {
    /// Create a new account
    ///
    /// No validation is performed on the name or the sign of the initial
    /// balance; the caller (the store) is responsible for assigning the
    /// number.
    pub fn new(number: AccountNumber, name: impl Into<String>, balance: Decimal, kind: AccountKind) -> Self {
        Account {
            number,
            name: name.into(),
            balance,
            kind,
        }
    }

    /// Deposit funds into the account
    ///
    /// Unconditionally adds `amount` to the balance using checked arithmetic.
    /// The model places no sign restriction on `amount`; the interactive
    /// prompt layer guards against negative amounts instead.
    ///
    /// # Returns
    ///
    /// * `Ok(new_balance)` - If the deposit was applied
    /// * `Err(LedgerError)` - If the addition would overflow
    pub fn deposit(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let new_balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.number))?;

        self.balance = new_balance;
        Ok(new_balance)
    }

    /// Withdraw funds from the account
    ///
    /// Applies the kind-specific policy: the withdrawal succeeds iff the
    /// resulting balance stays at or above [`AccountKind::withdrawal_floor`].
    /// On failure the balance is left unchanged.
    ///
    /// # Returns
    ///
    /// * `Ok(new_balance)` - If the withdrawal was applied
    /// * `Err(LedgerError)` - Policy denial ([`LedgerError::BelowMinimumBalance`]
    ///   for savings, [`LedgerError::OverdraftExceeded`] for current) or
    ///   arithmetic overflow
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, LedgerError> {
        let floor = self.kind.withdrawal_floor();

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("withdrawal", self.number))?;

        if new_balance < floor {
            return Err(match self.kind {
                AccountKind::Savings => LedgerError::below_minimum_balance(floor),
                AccountKind::Current => LedgerError::overdraft_exceeded(-floor),
            });
        }

        self.balance = new_balance;
        Ok(new_balance)
    }

    /// Replace the display name
    ///
    /// Unconditional overwrite, no format or uniqueness check.
    ///
    /// # Returns
    ///
    /// The previous name, for the "Name updated from .. to .." message.
    pub fn rename(&mut self, new_name: impl Into<String>) -> String {
        std::mem::replace(&mut self.name, new_name.into())
    }

    /// Write the account details to the given writer
    ///
    /// Emits number, name, and balance in that fixed order, one per line,
    /// with the balance suffixed by `Rs`.
    pub fn write_details(&self, output: &mut dyn Write) -> std::io::Result<()> {
        writeln!(output, "Account Number: {}", self.number)?;
        writeln!(output, "Account Name: {}", self.name)?;
        writeln!(output, "Account Balance: {} Rs", self.balance)
    }
}

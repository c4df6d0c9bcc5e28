//! Interactive menu session
//!
//! This module provides the `Session` struct: the command dispatcher that
//! drives the whole program. A session restores the store from the snapshot
//! file, then repeatedly reads one menu selection, collects any further
//! input the operation needs, applies it to the store, and prints the
//! result. Selecting option 7 saves the store and ends the loop.
//!
//! # Design
//!
//! The console reader and writer are generic parameters threaded in by the
//! caller rather than ambient globals, so tests drive a session with an
//! in-memory script and capture its output verbatim.
//!
//! # Input Handling
//!
//! Numeric prompts re-prompt until a parseable value is entered instead of
//! failing the whole operation; deposit and withdrawal amounts additionally
//! re-prompt on negative input. An unrecognized menu selection just prints
//! "Invalid option. Try again." and the loop continues. The only condition
//! that ends the loop abnormally is losing the console itself (EOF or a
//! write failure), which propagates out of [`Session::run`].

use crate::core::AccountStore;
use crate::io::{load_snapshot, save_snapshot};
use crate::types::{AccountKind, AccountNumber, LedgerError};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// One interactive ledger session over a console reader/writer pair
///
/// Owns the account store for the lifetime of the loop. The store is
/// restored from `data_file` when [`Session::run`] starts and persisted back
/// when the user quits.
pub struct Session<R, W> {
    store: AccountStore,
    input: R,
    output: W,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty store
    ///
    /// The store is populated from `data_file` by [`Session::run`].
    pub fn new(input: R, output: W, data_file: PathBuf) -> Self {
        Session {
            store: AccountStore::new(),
            input,
            output,
            data_file,
        }
    }

    /// The current account store
    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Run the menu loop until the user quits
    ///
    /// Restores the store, then dispatches menu selections until option 7
    /// saves the store and terminates the loop. Every domain error is
    /// reported in-band and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error only when the console itself fails: the input stream
    /// ends mid-prompt ([`LedgerError::ConsoleClosed`]) or output cannot be
    /// written.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        self.restore()?;

        loop {
            self.write_menu()?;
            let selection = self.prompt_line("Enter your option: ")?;

            match selection.trim().parse::<u32>() {
                Ok(1) => self.add_customer()?,
                Ok(2) => self.change_customer_name()?,
                Ok(3) => self.check_balance()?,
                Ok(4) => self.deposit_amount()?,
                Ok(5) => self.withdraw_amount()?,
                Ok(6) => self.summary_of_accounts()?,
                Ok(7) => {
                    self.quit()?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option. Try again.")?,
            }
        }
    }

    /// Restore the store from the snapshot file
    ///
    /// A missing file starts fresh; an unreadable file is reported and the
    /// session continues with an empty store. Neither aborts the process.
    fn restore(&mut self) -> Result<(), LedgerError> {
        match load_snapshot(&self.data_file) {
            Ok(Some(accounts)) => match AccountStore::from_accounts(accounts) {
                Ok(store) => self.store = store,
                Err(error) => writeln!(self.output, "Error loading data: {}", error)?,
            },
            Ok(None) => writeln!(self.output, "No existing data found, starting fresh.")?,
            Err(error) => writeln!(self.output, "Error loading data: {}", error)?,
        }
        Ok(())
    }

    /// Save the store and print the termination message
    fn quit(&mut self) -> Result<(), LedgerError> {
        match save_snapshot(&self.data_file, self.store.accounts()) {
            Ok(()) => writeln!(self.output, "Data saved successfully.")?,
            Err(error) => writeln!(self.output, "Error saving data: {}", error)?,
        }
        writeln!(self.output, "Terminating...")?;
        Ok(())
    }

    fn write_menu(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "Banking Menu: ")?;
        writeln!(self.output, "Select any one option from below.")?;
        writeln!(self.output, "1) Add Customer")?;
        writeln!(self.output, "2) Change Customer Name")?;
        writeln!(self.output, "3) Check Account Balance")?;
        writeln!(self.output, "4) Deposit Amount")?;
        writeln!(self.output, "5) Withdraw Amount")?;
        writeln!(self.output, "6) Summary of All Accounts")?;
        writeln!(self.output, "7) Quit")?;
        Ok(())
    }

    /// Menu option 1: create a new account
    ///
    /// An unrecognized kind choice aborts the add; nothing is appended.
    fn add_customer(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "\nAdd Customer Menu")?;
        let name = self.prompt_line("Enter Customer Name: ")?;
        let balance = self.prompt_signed_amount("Enter Initial Balance: ")?;
        writeln!(self.output, "Select Account Type (1 for Savings, 2 for Current): ")?;
        let choice = self.read_line()?;

        let kind = match choice.trim().parse::<u32>() {
            Ok(1) => AccountKind::Savings,
            Ok(2) => AccountKind::Current,
            _ => {
                let error = LedgerError::invalid_account_kind(choice.trim());
                writeln!(self.output, "{}", error)?;
                return Ok(());
            }
        };

        let number = self.store.open(name, balance, kind).number;
        writeln!(
            self.output,
            "Account created successfully! Account Number: {}",
            number
        )?;
        Ok(())
    }

    /// Menu option 2: rename an existing account
    fn change_customer_name(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "\nChange Customer Name Menu")?;
        let Some(number) = self.prompt_existing_account()? else {
            return Ok(());
        };

        let new_name = self.prompt_line("Enter the new name: ")?;
        // Validated above; the store is untouched in between
        let account = self.store.get_mut(number)?;
        let old_name = account.rename(new_name.clone());
        writeln!(
            self.output,
            "Name updated from {} to {}",
            old_name, new_name
        )?;
        Ok(())
    }

    /// Menu option 3: display one account
    fn check_balance(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "\nCheck Account Balance Menu")?;
        let Some(number) = self.prompt_existing_account()? else {
            return Ok(());
        };

        let account = self.store.get(number)?;
        account.write_details(&mut self.output)?;
        Ok(())
    }

    /// Menu option 4: deposit into an account
    fn deposit_amount(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "\nDeposit Amount Menu")?;
        let Some(number) = self.prompt_existing_account()? else {
            return Ok(());
        };

        let amount = self.prompt_amount("Enter amount to deposit: ")?;
        match self.store.get_mut(number)?.deposit(amount) {
            Ok(balance) => writeln!(
                self.output,
                "Deposit Successful! New balance: {}",
                balance
            )?,
            Err(error) => writeln!(self.output, "{}", error)?,
        }
        Ok(())
    }

    /// Menu option 5: withdraw from an account
    ///
    /// The policy denial message comes straight from the error's `Display`.
    fn withdraw_amount(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "\nWithdraw Amount Menu")?;
        let Some(number) = self.prompt_existing_account()? else {
            return Ok(());
        };

        let amount = self.prompt_amount("Enter amount to withdraw: ")?;
        match self.store.get_mut(number)?.withdraw(amount) {
            Ok(balance) => writeln!(
                self.output,
                "Withdrawal Successful! New balance: {}",
                balance
            )?,
            Err(error) => writeln!(self.output, "{}", error)?,
        }
        Ok(())
    }

    /// Menu option 6: display every account, blank line between entries
    fn summary_of_accounts(&mut self) -> Result<(), LedgerError> {
        writeln!(self.output, "\nSummary of All Accounts")?;
        for account in self.store.accounts() {
            account.write_details(&mut self.output)?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// Prompt for an account number and check it against the store
    ///
    /// Prints "Account does not exist." and returns `Ok(None)` when the
    /// number is out of bounds; the calling operation aborts without
    /// touching the store.
    fn prompt_existing_account(&mut self) -> Result<Option<AccountNumber>, LedgerError> {
        let number = self.prompt_account_number("Enter your Account Number: ")?;
        if let Err(error) = self.store.get(number) {
            writeln!(self.output, "{}", error)?;
            return Ok(None);
        }
        Ok(Some(number))
    }

    /// Read one line, stripped of its trailing newline
    ///
    /// # Errors
    ///
    /// [`LedgerError::ConsoleClosed`] when the input stream has ended.
    fn read_line(&mut self) -> Result<String, LedgerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LedgerError::ConsoleClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }

    /// Print a prompt (no newline) and read the reply line
    fn prompt_line(&mut self, prompt: &str) -> Result<String, LedgerError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompt for an account number, re-prompting on malformed input
    fn prompt_account_number(&mut self, prompt: &str) -> Result<AccountNumber, LedgerError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.trim().parse::<AccountNumber>() {
                Ok(number) => return Ok(number),
                Err(_) => writeln!(self.output, "Please enter a whole number.")?,
            }
        }
    }

    /// Prompt for a non-negative amount, re-prompting on malformed or
    /// negative input
    ///
    /// Used for deposits and withdrawals, where a negative amount would
    /// silently invert the operation and skip the policy check.
    fn prompt_amount(&mut self, prompt: &str) -> Result<Decimal, LedgerError> {
        loop {
            let amount = self.prompt_signed_amount(prompt)?;
            if amount.is_sign_negative() {
                writeln!(self.output, "Amount must not be negative.")?;
                continue;
            }
            return Ok(amount);
        }
    }

    /// Prompt for any decimal amount, re-prompting on malformed input
    ///
    /// Sign is allowed: the initial balance of an account is accepted as-is.
    fn prompt_signed_amount(&mut self, prompt: &str) -> Result<Decimal, LedgerError> {
        loop {
            let line = self.prompt_line(prompt)?;
            match Decimal::from_str(line.trim()) {
                Ok(amount) => return Ok(amount),
                Err(_) => writeln!(self.output, "Please enter a numeric amount.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;
    use rstest::rstest;
    use std::path::Path;
    use tempfile::tempdir;

    /// Run a scripted session against the given snapshot path
    ///
    /// Returns the final store state and everything the session printed.
    fn run_script(script: &str, data_file: &Path) -> (AccountStore, String) {
        let mut output = Vec::new();
        let mut session = Session::new(script.as_bytes(), &mut output, data_file.to_path_buf());
        session.run().unwrap_or_else(|e| panic!("session failed: {}", e));
        let store = session.store().clone();
        drop(session);
        (store, String::from_utf8(output).unwrap())
    }

    fn fresh_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
        dir.path().join("bank_accounts.csv")
    }

    #[test]
    fn test_cold_start_and_quit() {
        let dir = tempdir().unwrap();
        let (store, output) = run_script("7\n", &fresh_path(&dir));

        assert!(store.is_empty());
        assert!(output.contains("No existing data found, starting fresh."));
        assert!(output.contains("Data saved successfully."));
        assert!(output.contains("Terminating..."));
    }

    #[test]
    fn test_add_customer_creates_sequential_accounts() {
        let dir = tempdir().unwrap();
        let script = "1\nAlice\n1000\n1\n1\nBob\n0\n2\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().kind, AccountKind::Savings);
        assert_eq!(store.get(1).unwrap().kind, AccountKind::Current);
        assert!(output.contains("Account created successfully! Account Number: 0"));
        assert!(output.contains("Account created successfully! Account Number: 1"));
    }

    #[test]
    fn test_invalid_account_type_aborts_the_add() {
        let dir = tempdir().unwrap();
        let script = "1\nAlice\n1000\n3\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert!(store.is_empty());
        assert!(output.contains("Invalid account type. Account not created."));
    }

    #[rstest]
    #[case::rename("2\n")]
    #[case::balance("3\n")]
    #[case::deposit("4\n")]
    #[case::withdraw("5\n")]
    fn test_missing_account_aborts_operation(#[case] option: &str) {
        let dir = tempdir().unwrap();
        let script = format!("{option}5\n7\n");
        let (store, output) = run_script(&script, &fresh_path(&dir));

        assert!(store.is_empty());
        assert!(output.contains("Account does not exist."));
    }

    #[test]
    fn test_rename_flow() {
        let dir = tempdir().unwrap();
        let script = "1\nA\n1000\n1\n2\n0\nB\n6\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert_eq!(store.get(0).unwrap().name, "B");
        assert!(output.contains("Name updated from A to B"));
        assert!(output.contains("Account Name: B"));
    }

    #[test]
    fn test_savings_withdrawal_denied_below_floor() {
        let dir = tempdir().unwrap();
        // Savings with 1000; withdrawing 600 would leave 400 < 500
        let script = "1\nAlice\n1000\n1\n5\n0\n600\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert_eq!(store.get(0).unwrap().balance, Decimal::new(1000, 0));
        assert!(output.contains("Insufficient balance. Minimum balance required: 500"));
    }

    #[test]
    fn test_current_withdrawal_into_overdraft() {
        let dir = tempdir().unwrap();
        let script = "1\nBob\n0\n2\n5\n0\n9000\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert_eq!(store.get(0).unwrap().balance, Decimal::new(-9000, 0));
        assert!(output.contains("Withdrawal Successful! New balance: -9000"));
    }

    #[test]
    fn test_current_withdrawal_past_overdraft_limit() {
        let dir = tempdir().unwrap();
        let script = "1\nBob\n0\n2\n5\n0\n11000\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert_eq!(store.get(0).unwrap().balance, Decimal::ZERO);
        assert!(output.contains("Overdraft limit exceeded. Maximum allowed overdraft: 10000"));
    }

    #[test]
    fn test_deposit_flow() {
        let dir = tempdir().unwrap();
        let script = "1\nAlice\n1000\n1\n4\n0\n250.50\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert_eq!(store.get(0).unwrap().balance, Decimal::new(125050, 2));
        assert!(output.contains("Deposit Successful! New balance: 1250.50"));
    }

    #[test]
    fn test_invalid_menu_option_keeps_looping() {
        let dir = tempdir().unwrap();
        let (_, output) = run_script("9\nbogus\n7\n", &fresh_path(&dir));

        assert_eq!(output.matches("Invalid option. Try again.").count(), 2);
        assert!(output.contains("Terminating..."));
    }

    #[test]
    fn test_reprompt_on_malformed_number() {
        let dir = tempdir().unwrap();
        // "abc" for the account number, then a valid one
        let script = "1\nAlice\n1000\n1\n3\nabc\n0\n7\n";
        let (_, output) = run_script(script, &fresh_path(&dir));

        assert!(output.contains("Please enter a whole number."));
        assert!(output.contains("Account Number: 0"));
    }

    #[test]
    fn test_reprompt_on_negative_deposit() {
        let dir = tempdir().unwrap();
        let script = "1\nAlice\n1000\n1\n4\n0\n-50\n50\n7\n";
        let (store, output) = run_script(script, &fresh_path(&dir));

        assert!(output.contains("Amount must not be negative."));
        assert_eq!(store.get(0).unwrap().balance, Decimal::new(1050, 0));
    }

    #[test]
    fn test_summary_separates_entries_with_blank_line() {
        let dir = tempdir().unwrap();
        let script = "1\nAlice\n1000\n1\n1\nBob\n0\n2\n6\n7\n";
        let (_, output) = run_script(script, &fresh_path(&dir));

        assert!(output.contains(
            "Summary of All Accounts\n\
             Account Number: 0\nAccount Name: Alice\nAccount Balance: 1000 Rs\n\n\
             Account Number: 1\nAccount Name: Bob\nAccount Balance: 0 Rs\n"
        ));
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let dir = tempdir().unwrap();
        let path = fresh_path(&dir);
        std::fs::write(&path, "number,kind,name,balance\n0,checking,Alice,1000\n").unwrap();

        let (store, output) = run_script("7\n", &path);

        assert!(store.is_empty());
        assert!(output.contains("Error loading data: corrupt snapshot:"));
    }

    #[test]
    fn test_console_eof_is_reported() {
        let dir = tempdir().unwrap();
        let mut output = Vec::new();
        let mut session = Session::new(&b""[..], &mut output, fresh_path(&dir));

        assert_eq!(session.run(), Err(LedgerError::ConsoleClosed));
    }

    #[test]
    fn test_restore_replays_saved_accounts() {
        let dir = tempdir().unwrap();
        let path = fresh_path(&dir);
        let account = Account::new(0, "Alice", Decimal::new(1000, 0), AccountKind::Savings);
        save_snapshot(&path, &[account.clone()]).unwrap();

        let (store, output) = run_script("7\n", &path);

        assert_eq!(store.accounts(), &[account]);
        assert!(!output.contains("No existing data found"));
    }
}

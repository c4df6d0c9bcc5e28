//! Whole-store snapshot persistence
//!
//! The entire account store is written to, and read from, a single CSV file
//! as one unit. Every save rewrites everything; every load replaces
//! everything. There is no incremental or transactional persistence.
//!
//! # File format
//!
//! One header row `number,kind,name,balance`, then one row per account in
//! store order. The kind column is an explicit tag (`savings` / `current`) so
//! that restore can reconstruct the correct withdrawal policy without any
//! runtime type information. Balances are written with `Decimal`'s exact
//! string form, so a persist/restore round trip reproduces every account
//! bit-for-bit.
//!
//! # Error Handling
//!
//! - A missing file is a cold start, not an error: [`load_snapshot`] returns
//!   `Ok(None)`.
//! - A present-but-unreadable file (bad header, malformed row, unknown kind
//!   tag) is reported as an error; the caller degrades to an empty store.
//! - The file handle is scoped to each call and released on every exit path.

use crate::types::{Account, AccountKind, LedgerError};
use csv::{Reader, ReaderBuilder, Writer};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Expected snapshot header columns, in order
const SNAPSHOT_HEADER: [&str; 4] = ["number", "kind", "name", "balance"];

/// CSV record structure for snapshot deserialization
///
/// The kind and balance columns are read as raw strings and converted
/// explicitly, so that a bad tag or a malformed amount produces a message
/// naming the offending value.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SnapshotRecord {
    pub number: u32,
    pub kind: String,
    pub name: String,
    pub balance: String,
}

/// Convert a SnapshotRecord into a domain Account
///
/// # Returns
///
/// * `Ok(Account)` - Successfully converted record
/// * `Err(LedgerError)` - Unknown kind tag or malformed balance
fn convert_snapshot_record(record: SnapshotRecord) -> Result<Account, LedgerError> {
    let kind = AccountKind::from_tag(&record.kind).ok_or_else(|| {
        LedgerError::snapshot_corrupt(format!(
            "unknown account kind '{}' for account {}",
            record.kind, record.number
        ))
    })?;

    let balance = Decimal::from_str(&record.balance).map_err(|_| {
        LedgerError::snapshot_corrupt(format!(
            "invalid balance '{}' for account {}",
            record.balance, record.number
        ))
    })?;

    Ok(Account::new(record.number, record.name, balance, kind))
}

/// Read a snapshot from any reader
///
/// Validates the header row, then deserializes and converts every record.
/// Pure with respect to the filesystem; [`load_snapshot`] adds the
/// path-and-missing-file handling on top.
pub fn read_snapshot<R: Read>(input: R) -> Result<Vec<Account>, LedgerError> {
    let mut reader: Reader<R> = ReaderBuilder::new().from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.iter().ne(SNAPSHOT_HEADER) {
        return Err(LedgerError::snapshot_corrupt(format!(
            "unexpected header row '{}'",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    let mut accounts = Vec::new();
    for result in reader.deserialize() {
        let record: SnapshotRecord = result?;
        accounts.push(convert_snapshot_record(record)?);
    }
    Ok(accounts)
}

/// Write a snapshot of the given accounts to any writer
///
/// Writes the header row followed by one row per account, in the order
/// given (store order). Names pass through CSV quoting unchanged, so commas
/// and quotes survive the round trip.
pub fn write_snapshot(accounts: &[Account], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(SNAPSHOT_HEADER)?;

    for account in accounts {
        writer.write_record([
            account.number.to_string(),
            account.kind.as_tag().to_string(),
            account.name.clone(),
            account.balance.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Restore the account store from the snapshot file
///
/// # Arguments
///
/// * `path` - Path to the snapshot file
///
/// # Returns
///
/// * `Ok(Some(accounts))` - The file existed and parsed cleanly
/// * `Ok(None)` - No file at the path (cold start, not an error)
/// * `Err(LedgerError)` - The file exists but could not be read or parsed
pub fn load_snapshot(path: &Path) -> Result<Option<Vec<Account>>, LedgerError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(error.into()),
    };

    read_snapshot(file).map(Some)
}

/// Persist the complete account store to the snapshot file
///
/// Rewrites the whole file; any prior content is replaced.
///
/// # Arguments
///
/// * `path` - Path to the snapshot file
/// * `accounts` - Every account in store order
pub fn save_snapshot(path: &Path, accounts: &[Account]) -> Result<(), LedgerError> {
    let mut file = File::create(path)?;
    write_snapshot(accounts, &mut file)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    fn sample_accounts() -> Vec<Account> {
        vec![
            Account::new(0, "Alice", Decimal::new(1000, 0), AccountKind::Savings),
            Account::new(1, "Bob, Jr.", Decimal::new(-9000, 0), AccountKind::Current),
            Account::new(2, "Cärol \"C\"", Decimal::new(12345, 2), AccountKind::Savings),
        ]
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank_accounts.csv");
        let accounts = sample_accounts();

        save_snapshot(&path, &accounts).unwrap();
        let restored = load_snapshot(&path).unwrap().unwrap();

        assert_eq!(restored, accounts);
    }

    #[test]
    fn test_round_trip_of_empty_store() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank_accounts.csv");

        save_snapshot(&path, &[]).unwrap();
        let restored = load_snapshot(&path).unwrap().unwrap();

        assert!(restored.is_empty());
    }

    #[test]
    fn test_missing_file_is_a_cold_start() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.csv");

        assert_eq!(load_snapshot(&path).unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bank_accounts.csv");

        save_snapshot(&path, &sample_accounts()).unwrap();
        let one = vec![Account::new(0, "Solo", Decimal::ZERO, AccountKind::Current)];
        save_snapshot(&path, &one).unwrap();

        assert_eq!(load_snapshot(&path).unwrap().unwrap(), one);
    }

    #[rstest]
    #[case::wrong_header("garbage\n0,savings,Alice,1000\n")]
    #[case::unknown_kind("number,kind,name,balance\n0,checking,Alice,1000\n")]
    #[case::bad_balance("number,kind,name,balance\n0,savings,Alice,lots\n")]
    #[case::missing_columns("number,kind,name,balance\n0,savings\n")]
    fn test_unparseable_file_is_an_error(#[case] contents: &str) {
        let result = read_snapshot(contents.as_bytes());
        assert!(result.is_err(), "expected error for: {contents:?}");
    }

    #[test]
    fn test_unknown_kind_names_the_tag() {
        let contents = "number,kind,name,balance\n0,checking,Alice,1000\n";
        let error = read_snapshot(contents.as_bytes()).unwrap_err();
        assert_eq!(
            error,
            LedgerError::snapshot_corrupt("unknown account kind 'checking' for account 0")
        );
    }

    #[test]
    fn test_written_format_is_stable() {
        let mut output = Vec::new();
        let accounts = vec![Account::new(
            0,
            "Alice",
            Decimal::new(1000, 0),
            AccountKind::Savings,
        )];
        write_snapshot(&accounts, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "number,kind,name,balance\n0,savings,Alice,1000\n");
    }
}

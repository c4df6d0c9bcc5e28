//! Rust Bank Ledger CLI
//!
//! Interactive, menu-driven ledger over savings and current accounts.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file ledger.csv
//! ```
//!
//! The program restores the account store from the snapshot file (starting
//! fresh if none exists), then reads menu selections from stdin until the
//! user quits with option 7, which saves the store back to the file.
//!
//! # Exit Codes
//!
//! - 0: Session ended via the quit option
//! - 1: The console stream itself failed (EOF mid-prompt, write error)
//!
//! Domain errors (unknown account, denied withdrawal, unreadable snapshot)
//! are printed in-band and never change the exit code.

use rust_bank_ledger::cli;
use rust_bank_ledger::Session;
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), args.data_file);

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

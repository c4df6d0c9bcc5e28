use clap::Parser;
use std::path::PathBuf;

/// Interactive menu-driven bank account ledger
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Interactive menu-driven bank account ledger", long_about = None)]
pub struct CliArgs {
    /// Path of the account snapshot file
    ///
    /// Loaded on startup (if present) and rewritten when the session quits.
    /// The default matches the filename the ledger has always used, so a
    /// bare invocation behaves exactly like earlier versions.
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = "bank_accounts.csv",
        help = "Path of the account snapshot file"
    )]
    pub data_file: PathBuf,
}

// CLI module
// Command-line interface: argument parsing and the interactive menu session

mod args;
mod session;

pub use args::CliArgs;
pub use session::Session;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g. an unknown flag, or --help), clap displays an error
/// message or the help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

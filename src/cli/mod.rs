//! CLI module for brfss
//!
//! Provides command-line interface for:
//! - validate: check a dataset against the data dictionary
//! - dictionary: print the dictionary
//! - frequencies: tabulate one field over the valid rows

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command, Format};
pub use commands::{frequencies, run_command, validate, Outcome};
pub use errors::{CliError, CliResult};

/// Parse process arguments and run the selected command
pub fn run() -> CliResult<Outcome> {
    run_command(Cli::parse_args())
}

//! brfss CLI entry point
//!
//! Parses arguments, dispatches to the CLI module and maps the outcome to an
//! exit status:
//! - 0: every record valid
//! - 1: operational failure (I/O, malformed input, bad config)
//! - 2: ran to completion but found invalid records

use brfss::cli::{self, Outcome};

fn main() {
    match cli::run() {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::InvalidRecords) => std::process::exit(2),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

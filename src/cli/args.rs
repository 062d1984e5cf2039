//! CLI argument definitions using clap
//!
//! Commands:
//! - brfss validate --input <csv> [--config <json>] [--format json|text] [--all-rows]
//! - brfss validate --stdin
//! - brfss dictionary
//! - brfss frequencies --input <csv> --field <name>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// brfss - Validate and tabulate the BRFSS 2015 diabetes indicators dataset
#[derive(Parser, Debug)]
#[command(name = "brfss")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress structured logs on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate every row of a dataset against the data dictionary
    Validate {
        /// CSV file with a header row
        #[arg(long, required_unless_present = "stdin", conflicts_with = "stdin")]
        input: Option<PathBuf>,

        /// Read newline-delimited JSON records from stdin instead
        #[arg(long)]
        stdin: bool,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// List valid rows in the report too
        #[arg(long)]
        all_rows: bool,

        /// Report columns that are not in the dictionary
        #[arg(long)]
        report_unknown: bool,
    },

    /// Print the data dictionary as JSON
    Dictionary,

    /// Frequency table and summary of one field, over valid rows
    Frequencies {
        /// CSV file with a header row
        #[arg(long)]
        input: PathBuf,

        /// Dictionary field name (case-sensitive)
        #[arg(long)]
        field: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

//! Tabular input
//!
//! One row per respondent. Column names are matched against the dictionary
//! exactly (case-sensitive); no cleaning or transformation happens here.

mod errors;
mod reader;

pub use errors::{TableError, TableResult};
pub use reader::{parse_cell, read_ndjson, CsvTableReader, Table};

//! # Table Errors

use thiserror::Error;

/// Result type for table loading
pub type TableResult<T> = Result<T, TableError>;

/// Errors while reading an input table.
///
/// These abort the load. Problems inside well-formed rows are validation
/// violations instead.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV header: {0}")]
    Header(#[source] csv::Error),

    #[error("Duplicate column '{0}' in header")]
    DuplicateColumn(String),

    #[error("Malformed CSV at row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid JSON at line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Line {0} is not a JSON object")]
    NotAnObject(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            TableError::Open { .. } => "BRFSS_TABLE_OPEN",
            TableError::Header(_) => "BRFSS_TABLE_HEADER",
            TableError::DuplicateColumn(_) => "BRFSS_TABLE_DUPLICATE_COLUMN",
            TableError::Row { .. } => "BRFSS_TABLE_ROW",
            TableError::Json { .. } => "BRFSS_TABLE_JSON",
            TableError::NotAnObject(_) => "BRFSS_TABLE_NOT_OBJECT",
            TableError::Io(_) => "BRFSS_TABLE_IO",
        }
    }
}

//! CLI-specific error types
//!
//! All CLI errors end the process with status 1.

use thiserror::Error;

use crate::config::ConfigError;
use crate::table::TableError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Unknown field '{0}'; field names are case-sensitive")]
    UnknownField(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        match self {
            CliError::Config(e) => e.code(),
            CliError::Table(e) => e.code(),
            CliError::UnknownField(_) => "BRFSS_CLI_UNKNOWN_FIELD",
            CliError::Output(_) => "BRFSS_CLI_OUTPUT",
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(format!("JSON error: {}", e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_pass_through() {
        let err: CliError = TableError::NotAnObject(3).into();
        assert_eq!(err.code_str(), "BRFSS_TABLE_NOT_OBJECT");
        assert!(err.to_string().contains("Line 3"));

        let err = CliError::UnknownField("age".into());
        assert_eq!(err.code_str(), "BRFSS_CLI_UNKNOWN_FIELD");
    }
}

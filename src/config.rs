//! Validator configuration
//!
//! Loaded from an optional JSON file. Every key is optional:
//!
//! ```json
//! {
//!   "unknown_fields": "ignore",
//!   "parallel_threshold": 1024,
//!   "include_valid_rows": false,
//!   "max_reported_rows": 0
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::schema::{SchemaValidator, UnknownFieldPolicy};

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "BRFSS_CONFIG_READ",
            ConfigError::Parse { .. } => "BRFSS_CONFIG_PARSE",
        }
    }
}

fn default_parallel_threshold() -> usize {
    1024
}

/// Settings for a validation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Policy for columns outside the dictionary (default: ignore)
    #[serde(default)]
    pub unknown_fields: UnknownFieldPolicy,

    /// Row count at or above which batches validate in parallel (0 = always)
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,

    /// Whether reports list valid rows as well as invalid ones
    #[serde(default)]
    pub include_valid_rows: bool,

    /// Cap on listed rows in a report (0 = unlimited); totals are unaffected
    #[serde(default)]
    pub max_reported_rows: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::default(),
            parallel_threshold: default_parallel_threshold(),
            include_valid_rows: false,
            max_reported_rows: 0,
        }
    }
}

impl ValidatorConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: "<inline>".into(),
            source,
        })
    }

    /// Loads `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Builds the record validator this configuration describes
    pub fn validator(&self) -> SchemaValidator {
        SchemaValidator::with_policy(self.unknown_fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ValidatorConfig::default();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Ignore);
        assert_eq!(config.parallel_threshold, 1024);
        assert!(!config.include_valid_rows);
        assert_eq!(config.max_reported_rows, 0);
    }

    #[test]
    fn test_empty_object_gives_defaults() {
        assert_eq!(ValidatorConfig::from_json("{}").unwrap(), ValidatorConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config =
            ValidatorConfig::from_json(r#"{"unknown_fields": "report", "parallel_threshold": 0}"#)
                .unwrap();
        assert_eq!(config.unknown_fields, UnknownFieldPolicy::Report);
        assert_eq!(config.parallel_threshold, 0);
        assert_eq!(config.validator().policy(), UnknownFieldPolicy::Report);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let err = ValidatorConfig::from_json(r#"{"unknown_fields": "drop"}"#).unwrap_err();
        assert_eq!(err.code(), "BRFSS_CONFIG_PARSE");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ValidatorConfig::from_json(r#"{"paralel_threshold": 5}"#).unwrap_err();
        assert_eq!(err.code(), "BRFSS_CONFIG_PARSE");
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("brfss.json");
        std::fs::write(&path, r#"{"include_valid_rows": true}"#).unwrap();

        let config = ValidatorConfig::load(&path).unwrap();
        assert!(config.include_valid_rows);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = ValidatorConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert_eq!(err.code(), "BRFSS_CONFIG_READ");
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(
            ValidatorConfig::load_or_default(None).unwrap(),
            ValidatorConfig::default()
        );
    }
}

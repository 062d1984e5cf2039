//! Validation outcome types
//!
//! Violation kinds:
//! - BRFSS_MISSING_FIELD: a dictionary variable is absent
//! - BRFSS_OUT_OF_DOMAIN: a value lies outside its variable's domain
//! - BRFSS_UNKNOWN_FIELD: an undeclared column, only under the report policy
//!
//! Violations are data, never errors. A record carrying any of them is rejected
//! but batch processing carries on.

use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::types::Domain;

/// Kind of a violation, with a stable code string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingField,
    OutOfDomain,
    UnknownField,
}

impl ViolationKind {
    /// Returns the stable code string
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::MissingField => "BRFSS_MISSING_FIELD",
            ViolationKind::OutOfDomain => "BRFSS_OUT_OF_DOMAIN",
            ViolationKind::UnknownField => "BRFSS_UNKNOWN_FIELD",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single problem found in a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Required variable absent from the record
    MissingField { field: String },
    /// Value not in the variable's domain
    OutOfDomain {
        field: String,
        value: Value,
        #[serde(serialize_with = "serialize_domain")]
        expected: Domain,
    },
    /// Column not in the dictionary
    UnknownField { field: String },
}

impl Violation {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Violation::MissingField {
            field: field.into(),
        }
    }

    pub fn out_of_domain(field: impl Into<String>, value: Value, expected: Domain) -> Self {
        Violation::OutOfDomain {
            field: field.into(),
            value,
            expected,
        }
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Violation::UnknownField {
            field: field.into(),
        }
    }

    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::MissingField { .. } => ViolationKind::MissingField,
            Violation::OutOfDomain { .. } => ViolationKind::OutOfDomain,
            Violation::UnknownField { .. } => ViolationKind::UnknownField,
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Violation::MissingField { field }
            | Violation::OutOfDomain { field, .. }
            | Violation::UnknownField { field } => field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingField { field } => {
                write!(f, "[{}] field '{}' is missing", self.kind(), field)
            }
            Violation::OutOfDomain {
                field,
                value,
                expected,
            } => write!(
                f,
                "[{}] field '{}': expected {}, got {}",
                self.kind(),
                field,
                expected,
                value
            ),
            Violation::UnknownField { field } => {
                write!(f, "[{}] field '{}' is not in the dictionary", self.kind(), field)
            }
        }
    }
}

fn serialize_domain<S: Serializer>(domain: &Domain, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(domain)
}

/// Outcome of validating one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    /// Builds a result from a violation list, `Valid` when empty.
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Violations found, empty for a valid record.
    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(v) => v,
        }
    }

    pub fn into_violations(self) -> Vec<Violation> {
        match self {
            ValidationResult::Valid => Vec::new(),
            ValidationResult::Invalid(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codes() {
        assert_eq!(ViolationKind::MissingField.code(), "BRFSS_MISSING_FIELD");
        assert_eq!(ViolationKind::OutOfDomain.code(), "BRFSS_OUT_OF_DOMAIN");
        assert_eq!(ViolationKind::UnknownField.code(), "BRFSS_UNKNOWN_FIELD");
    }

    #[test]
    fn test_out_of_domain_display() {
        let v = Violation::out_of_domain("GenHlth", json!(6), Domain::Range { min: 1, max: 5 });
        let display = v.to_string();
        assert!(display.contains("GenHlth"));
        assert!(display.contains("[1,5]"));
        assert!(display.contains("got 6"));
    }

    #[test]
    fn test_out_of_domain_serializes_expected_as_text() {
        let v = Violation::out_of_domain("Sex", json!(2), Domain::Binary);
        let encoded = serde_json::to_value(&v).unwrap();
        assert_eq!(
            encoded,
            json!({"kind": "out_of_domain", "field": "Sex", "value": 2, "expected": "{0,1}"})
        );
    }

    #[test]
    fn test_result_serialization() {
        let valid = serde_json::to_value(ValidationResult::Valid).unwrap();
        assert_eq!(valid, json!({"status": "valid"}));

        let invalid =
            serde_json::to_value(ValidationResult::Invalid(vec![Violation::missing_field("BMI")]))
                .unwrap();
        assert_eq!(
            invalid,
            json!({"status": "invalid", "violations": [{"kind": "missing_field", "field": "BMI"}]})
        );
    }

    #[test]
    fn test_from_violations() {
        assert!(ValidationResult::from_violations(vec![]).is_valid());
        let r = ValidationResult::from_violations(vec![Violation::missing_field("Age")]);
        assert!(!r.is_valid());
        assert_eq!(r.violations()[0].field(), "Age");
    }
}

//! Record validator for the survey dictionary
//!
//! Validation semantics:
//! - Every dictionary variable must be present
//! - Every present variable must hold an integer code inside its domain
//! - Undeclared columns are ignored, or reported under `UnknownFieldPolicy::Report`
//!
//! Validation is a single stateless pass. It never fails: every problem comes
//! back as a `Violation` inside the `ValidationResult`.

use serde::{Deserialize, Serialize};

use super::dictionary::{field, SURVEY_FIELDS};
use super::record::Record;
use super::violations::{ValidationResult, Violation};

/// What to do with columns that are not in the dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldPolicy {
    /// Accept and ignore extra columns
    #[default]
    Ignore,
    /// Report each extra column as an `UnknownField` violation
    Report,
}

/// Validates survey records against the data dictionary.
///
/// Validator does not mutate records. Validation is deterministic:
/// violations come out in dictionary order, unknown fields last in name order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator {
    unknown_fields: UnknownFieldPolicy,
}

impl SchemaValidator {
    /// Creates a validator that ignores unknown columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with the given unknown-column policy.
    pub fn with_policy(unknown_fields: UnknownFieldPolicy) -> Self {
        Self { unknown_fields }
    }

    pub fn policy(&self) -> UnknownFieldPolicy {
        self.unknown_fields
    }

    /// Validates one record.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut violations = Vec::new();

        for def in SURVEY_FIELDS.iter() {
            match record.get(def.name) {
                Some(value) if def.domain.check(value).is_none() => {
                    violations.push(Violation::out_of_domain(
                        def.name,
                        value.clone(),
                        def.domain,
                    ));
                }
                Some(_) => {}
                None => violations.push(Violation::missing_field(def.name)),
            }
        }

        if self.unknown_fields == UnknownFieldPolicy::Report {
            // Map keys iterate sorted unless serde_json's preserve_order is on.
            let mut unknown: Vec<&String> =
                record.keys().filter(|k| field(k).is_none()).collect();
            unknown.sort();
            violations.extend(unknown.into_iter().map(Violation::unknown_field));
        }

        ValidationResult::from_violations(violations)
    }
}

/// Validates a record with the default policy (unknown columns ignored).
pub fn validate(record: &Record) -> ValidationResult {
    SchemaValidator::new().validate(record)
}

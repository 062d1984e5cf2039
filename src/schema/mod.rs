//! Survey schema subsystem
//!
//! The data dictionary of the BRFSS 2015 diabetes indicators dataset, and the
//! validator that checks raw records against it.
//!
//! # Design Principles
//!
//! - All 22 variables required on every record
//! - Integer codes only, checked against each variable's domain
//! - No coercion beyond accepting integral floats (`3.0`)
//! - Violations are reported as data, never raised
//! - Deterministic validation

mod dictionary;
mod record;
mod types;
mod validator;
mod violations;

pub use dictionary::{field, field_index, field_names, FIELD_COUNT, SURVEY_FIELDS};
pub use record::{Record, SurveyRecord};
pub use types::{integer_code, Category, Domain, FieldDef};
pub use validator::{validate, SchemaValidator, UnknownFieldPolicy};
pub use violations::{ValidationResult, Violation, ViolationKind};

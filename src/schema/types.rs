//! Field domain and definition types
//!
//! Every dictionary variable is an integer code. Domains are:
//! - binary: {0,1}
//! - range: inclusive integer interval [min,max]
//! - at least: integers >= min, unbounded above (BMI)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The set of values a field may legally take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Domain {
    /// Flag field, 0 or 1
    Binary,
    /// Inclusive integer range
    Range { min: i64, max: i64 },
    /// Integers greater than or equal to `min`
    AtLeast { min: i64 },
}

impl Domain {
    /// Returns true if the integer code belongs to this domain.
    pub fn contains(&self, code: i64) -> bool {
        match *self {
            Domain::Binary => code == 0 || code == 1,
            Domain::Range { min, max } => (min..=max).contains(&code),
            Domain::AtLeast { min } => code >= min,
        }
    }

    /// Checks a raw value, returning its integer code when it is in the domain.
    ///
    /// Integral floats (`3.0`) are accepted; the published dataset file stores
    /// every code that way.
    pub fn check(&self, value: &Value) -> Option<i64> {
        integer_code(value).filter(|code| self.contains(*code))
    }

    /// Smallest legal code.
    pub fn min(&self) -> i64 {
        match *self {
            Domain::Binary => 0,
            Domain::Range { min, .. } | Domain::AtLeast { min } => min,
        }
    }

    /// Largest legal code, `None` when unbounded.
    pub fn max(&self) -> Option<i64> {
        match *self {
            Domain::Binary => Some(1),
            Domain::Range { max, .. } => Some(max),
            Domain::AtLeast { .. } => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Binary => write!(f, "{{0,1}}"),
            Domain::Range { min, max } => write!(f, "[{},{}]", min, max),
            Domain::AtLeast { min } => write!(f, "[{},+inf)", min),
        }
    }
}

/// Extracts an integer code from a JSON number.
///
/// Returns `None` for non-numbers, non-finite values and fractional values.
/// Integral values beyond the `i64` range saturate, so they still fall inside
/// an unbounded domain and outside every bounded one.
pub fn integer_code(value: &Value) -> Option<i64> {
    let number = match value {
        Value::Number(n) => n,
        _ => return None,
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    if number.is_u64() {
        return Some(i64::MAX);
    }
    let f = number.as_f64()?;
    if !f.is_finite() || f.fract() != 0.0 {
        return None;
    }
    // `as` saturates at the i64 bounds.
    Some(f as i64)
}

/// A labelled category code of an ordinal or flag field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub code: i64,
    pub label: &'static str,
}

/// One dictionary variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDef {
    /// Column name, case-sensitive
    pub name: &'static str,
    /// Legal values
    pub domain: Domain,
    /// Short description from the data dictionary
    pub description: &'static str,
    /// Labels for each code; empty for counts and measurements
    pub categories: &'static [Category],
}

impl FieldDef {
    /// Returns the label of a code, if the field is categorical.
    pub fn label(&self, code: i64) -> Option<&'static str> {
        self.categories
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.label)
    }

    /// Returns true if the field is a yes/no style flag.
    pub fn is_binary(&self) -> bool {
        self.domain == Domain::Binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_binary_domain() {
        assert!(Domain::Binary.contains(0));
        assert!(Domain::Binary.contains(1));
        assert!(!Domain::Binary.contains(2));
        assert!(!Domain::Binary.contains(-1));
    }

    #[test]
    fn test_range_domain_is_inclusive() {
        let d = Domain::Range { min: 1, max: 5 };
        assert!(d.contains(1));
        assert!(d.contains(5));
        assert!(!d.contains(0));
        assert!(!d.contains(6));
    }

    #[test]
    fn test_at_least_domain() {
        let d = Domain::AtLeast { min: 1 };
        assert!(d.contains(1));
        assert!(d.contains(98));
        assert!(!d.contains(0));
        assert_eq!(d.max(), None);
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::Binary.to_string(), "{0,1}");
        assert_eq!(Domain::Range { min: 1, max: 5 }.to_string(), "[1,5]");
        assert_eq!(Domain::AtLeast { min: 1 }.to_string(), "[1,+inf)");
    }

    #[test]
    fn test_integer_code_accepts_integral_floats() {
        assert_eq!(integer_code(&json!(3)), Some(3));
        assert_eq!(integer_code(&json!(3.0)), Some(3));
        assert_eq!(integer_code(&json!(-2.0)), Some(-2));
        assert_eq!(integer_code(&json!(2.5)), None);
        assert_eq!(integer_code(&json!("3")), None);
        assert_eq!(integer_code(&json!(true)), None);
        assert_eq!(integer_code(&Value::Null), None);
    }

    #[test]
    fn test_integer_code_saturates_beyond_i64() {
        assert_eq!(integer_code(&json!(u64::MAX)), Some(i64::MAX));
        assert_eq!(integer_code(&json!(1e20)), Some(i64::MAX));
        assert_eq!(integer_code(&json!(-1e20)), Some(i64::MIN));
        assert_eq!(integer_code(&json!(1.5e300)), Some(i64::MAX));
    }

    #[test]
    fn test_oversized_codes_only_fit_unbounded_domain() {
        let bmi = Domain::AtLeast { min: 1 };
        assert_eq!(bmi.check(&json!(u64::MAX)), Some(i64::MAX));
        assert_eq!(bmi.check(&json!(1e20)), Some(i64::MAX));
        assert_eq!(bmi.check(&json!(-1e20)), None);
        assert_eq!(Domain::Binary.check(&json!(u64::MAX)), None);
        assert_eq!(Domain::Range { min: 1, max: 13 }.check(&json!(1e20)), None);
    }

    #[test]
    fn test_check_combines_code_and_domain() {
        let d = Domain::Range { min: 0, max: 30 };
        assert_eq!(d.check(&json!(30.0)), Some(30));
        assert_eq!(d.check(&json!(31)), None);
        assert_eq!(d.check(&json!(12.5)), None);
    }
}

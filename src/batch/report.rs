//! Validation report

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use uuid::Uuid;

use crate::observability::MetricsSnapshot;
use crate::schema::ValidationResult;

/// Outcome for one input row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowOutcome {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub result: ValidationResult,
}

/// Report of a batch validation run
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Counts over every row, regardless of which rows are listed
    pub totals: MetricsSnapshot,
    /// Listed row outcomes, in row order
    pub rows: Vec<RowOutcome>,
    /// True when `rows` was cut short by `max_reported_rows`
    pub truncated: bool,
}

impl ValidationReport {
    /// True when every row validated
    pub fn all_valid(&self) -> bool {
        self.totals.records_invalid == 0
    }

    /// Listed rows that failed validation
    pub fn invalid_rows(&self) -> impl Iterator<Item = &RowOutcome> {
        self.rows.iter().filter(|r| !r.result.is_valid())
    }

    /// Human-readable summary, one line per listed invalid row
    pub fn to_text(&self) -> String {
        let t = &self.totals;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "records: {}  valid: {}  invalid: {}",
            t.records_validated, t.records_valid, t.records_invalid
        );
        let _ = writeln!(
            out,
            "violations: {} (missing: {}, out of domain: {}, unknown: {})",
            t.violations(),
            t.missing_fields,
            t.out_of_domain,
            t.unknown_fields
        );
        for outcome in self.invalid_rows() {
            for violation in outcome.result.violations() {
                let _ = writeln!(out, "row {}: {}", outcome.row, violation);
            }
        }
        if self.truncated {
            let _ = writeln!(out, "(row listing truncated)");
        }
        out
    }
}

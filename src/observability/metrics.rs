//! Validation metrics
//!
//! - Counters only
//! - Monotonic increase
//! - Thread-safe, updated from rayon workers

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::schema::{ValidationResult, ViolationKind};

/// Counters for a validation run.
///
/// Relaxed ordering throughout; totals are read after the batch joins.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    records_validated: AtomicU64,
    records_valid: AtomicU64,
    records_invalid: AtomicU64,
    missing_fields: AtomicU64,
    out_of_domain: AtomicU64,
    unknown_fields: AtomicU64,
}

impl MetricsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one validated record and its violations.
    pub fn record_result(&self, result: &ValidationResult) {
        self.records_validated.fetch_add(1, Ordering::Relaxed);
        if result.is_valid() {
            self.records_valid.fetch_add(1, Ordering::Relaxed);
            return;
        }
        self.records_invalid.fetch_add(1, Ordering::Relaxed);
        for violation in result.violations() {
            self.counter(violation.kind()).fetch_add(1, Ordering::Relaxed);
        }
    }

    fn counter(&self, kind: ViolationKind) -> &AtomicU64 {
        match kind {
            ViolationKind::MissingField => &self.missing_fields,
            ViolationKind::OutOfDomain => &self.out_of_domain,
            ViolationKind::UnknownField => &self.unknown_fields,
        }
    }

    pub fn records_validated(&self) -> u64 {
        self.records_validated.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_validated: self.records_validated.load(Ordering::Relaxed),
            records_valid: self.records_valid.load(Ordering::Relaxed),
            records_invalid: self.records_invalid.load(Ordering::Relaxed),
            missing_fields: self.missing_fields.load(Ordering::Relaxed),
            out_of_domain: self.out_of_domain.load(Ordering::Relaxed),
            unknown_fields: self.unknown_fields.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time copy of all counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_validated: u64,
    pub records_valid: u64,
    pub records_invalid: u64,
    pub missing_fields: u64,
    pub out_of_domain: u64,
    pub unknown_fields: u64,
}

impl MetricsSnapshot {
    /// Total violations of every kind
    pub fn violations(&self) -> u64 {
        self.missing_fields + self.out_of_domain + self.unknown_fields
    }
}

//! Batch validation
//!
//! Each record is validated independently; a failing record never stops the
//! batch. At or above the configured row threshold, records are validated on
//! the rayon pool. Outcomes are always reported in row order.

mod report;

pub use report::{RowOutcome, ValidationReport};

use chrono::Utc;
use rayon::prelude::*;
use uuid::Uuid;

use crate::config::ValidatorConfig;
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::schema::{Record, SchemaValidator, ValidationResult};

/// Rejected rows logged individually per batch; the rest are only counted
const REJECTED_LOG_LIMIT: usize = 20;

fn should_log_rejection(rejected_so_far: usize) -> bool {
    rejected_so_far < REJECTED_LOG_LIMIT
}

/// Validates tables of records according to a configuration
pub struct BatchValidator {
    config: ValidatorConfig,
    validator: SchemaValidator,
    metrics: MetricsRegistry,
}

impl BatchValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        let validator = config.validator();
        Self {
            config,
            validator,
            metrics: MetricsRegistry::new(),
        }
    }

    /// Cumulative counters across every batch this validator has run
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    fn should_parallelize(&self, rows: usize) -> bool {
        rows >= self.config.parallel_threshold
    }

    /// Validates every record and builds the report.
    pub fn validate_batch(&self, records: &[Record]) -> ValidationReport {
        let parallel = self.should_parallelize(records.len());
        let rows = records.len().to_string();
        log_event_with_fields(
            Event::ValidationStart,
            &[("rows", rows.as_str()), ("parallel", if parallel { "true" } else { "false" })],
        );

        let batch_metrics = MetricsRegistry::new();
        let check = |record: &Record| -> ValidationResult {
            let result = self.validator.validate(record);
            batch_metrics.record_result(&result);
            self.metrics.record_result(&result);
            result
        };

        let results: Vec<ValidationResult> = if parallel {
            records.par_iter().map(check).collect()
        } else {
            records.iter().map(check).collect()
        };

        let mut listed = Vec::new();
        let mut truncated = false;
        let mut rejected = 0;
        for (index, result) in results.into_iter().enumerate() {
            let row = index + 1;
            if !result.is_valid() {
                if should_log_rejection(rejected) {
                    let row_str = row.to_string();
                    let count = result.violations().len().to_string();
                    log_event_with_fields(
                        Event::RecordRejected,
                        &[("row", row_str.as_str()), ("violations", count.as_str())],
                    );
                }
                rejected += 1;
            } else if !self.config.include_valid_rows {
                continue;
            }

            if self.config.max_reported_rows > 0 && listed.len() >= self.config.max_reported_rows {
                truncated = true;
                continue;
            }
            listed.push(RowOutcome { row, result });
        }

        let totals = batch_metrics.snapshot();
        let valid = totals.records_valid.to_string();
        let invalid = totals.records_invalid.to_string();
        let unlogged = rejected.saturating_sub(REJECTED_LOG_LIMIT).to_string();
        log_event_with_fields(
            Event::ValidationComplete,
            &[
                ("rows", rows.as_str()),
                ("valid", valid.as_str()),
                ("invalid", invalid.as_str()),
                ("unlogged_rejections", unlogged.as_str()),
            ],
        );

        ValidationReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            totals,
            rows: listed,
            truncated,
        }
    }
}

/// Validates a batch with the default configuration.
pub fn validate_batch(records: &[Record]) -> ValidationReport {
    BatchValidator::new(ValidatorConfig::default()).validate_batch(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(age: i64) -> Record {
        let mut r = Record::new();
        for name in crate::schema::field_names() {
            r.insert(name.to_string(), json!(1));
        }
        r.insert("Age".into(), json!(age));
        r
    }

    #[test]
    fn test_sequential_batch() {
        let records = vec![record(1), record(14), record(13)];
        let report = validate_batch(&records);

        assert_eq!(report.totals.records_validated, 3);
        assert_eq!(report.totals.records_invalid, 1);
        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].row, 2);
        assert!(!report.all_valid());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let records: Vec<Record> = (0..200).map(|i| record(i % 16)).collect();

        let sequential = BatchValidator::new(ValidatorConfig {
            parallel_threshold: usize::MAX,
            include_valid_rows: true,
            ..ValidatorConfig::default()
        })
        .validate_batch(&records);
        let parallel = BatchValidator::new(ValidatorConfig {
            parallel_threshold: 0,
            include_valid_rows: true,
            ..ValidatorConfig::default()
        })
        .validate_batch(&records);

        assert_eq!(sequential.rows, parallel.rows);
        assert_eq!(sequential.totals, parallel.totals);
        let order: Vec<usize> = parallel.rows.iter().map(|r| r.row).collect();
        assert_eq!(order, (1..=200).collect::<Vec<_>>());
    }

    #[test]
    fn test_max_reported_rows_truncates_listing_only() {
        let records: Vec<Record> = (0..10).map(|_| record(0)).collect();
        let report = BatchValidator::new(ValidatorConfig {
            max_reported_rows: 3,
            ..ValidatorConfig::default()
        })
        .validate_batch(&records);

        assert_eq!(report.rows.len(), 3);
        assert!(report.truncated);
        assert_eq!(report.totals.records_invalid, 10);
    }

    #[test]
    fn test_metrics_accumulate_across_batches() {
        let validator = BatchValidator::new(ValidatorConfig::default());
        validator.validate_batch(&[record(2)]);
        validator.validate_batch(&[record(2), record(20)]);
        assert_eq!(validator.metrics().records_validated(), 3);
    }

    #[test]
    fn test_rejection_logging_is_capped() {
        assert!(should_log_rejection(0));
        assert!(should_log_rejection(REJECTED_LOG_LIMIT - 1));
        assert!(!should_log_rejection(REJECTED_LOG_LIMIT));
        assert!(!should_log_rejection(250_000));
    }

    #[test]
    fn test_empty_batch() {
        let report = validate_batch(&[]);
        assert!(report.all_valid());
        assert!(report.rows.is_empty());
    }

    #[test]
    fn test_text_report() {
        let report = validate_batch(&[record(0)]);
        let text = report.to_text();
        assert!(text.contains("invalid: 1"));
        assert!(text.contains("row 1:"));
        assert!(text.contains("Age"));
    }
}

//! Observability subsystem
//!
//! - Structured logging (JSON lines on stderr)
//! - Validation metrics
//! - Lifecycle events
//!
//! Observability is read-only: it never changes a validation outcome.

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

fn severity_of(event: Event) -> Severity {
    if event.is_failure() {
        Severity::Error
    } else if event.is_warning() {
        Severity::Warn
    } else {
        Severity::Info
    }
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_of(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severity() {
        assert_eq!(severity_of(Event::TableFailed), Severity::Error);
        assert_eq!(severity_of(Event::RecordRejected), Severity::Warn);
        assert_eq!(severity_of(Event::ValidationComplete), Severity::Info);
    }

    #[test]
    fn test_log_event_does_not_panic() {
        log_event_with_fields(Event::ValidationStart, &[]);
        log_event_with_fields(Event::TableLoaded, &[("rows", "3")]);
    }
}

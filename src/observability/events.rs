//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

/// Lifecycle events of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded (file or defaults)
    ConfigLoaded,
    /// Input table read into records
    TableLoaded,
    /// Input table could not be read
    TableFailed,
    /// Batch validation begins
    ValidationStart,
    /// Batch validation finished
    ValidationComplete,
    /// A record failed validation
    RecordRejected,
    /// Frequency table computed
    FrequenciesComputed,
}

impl Event {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::TableLoaded => "TABLE_LOADED",
            Event::TableFailed => "TABLE_FAILED",
            Event::ValidationStart => "VALIDATION_START",
            Event::ValidationComplete => "VALIDATION_COMPLETE",
            Event::RecordRejected => "RECORD_REJECTED",
            Event::FrequenciesComputed => "FREQUENCIES_COMPUTED",
        }
    }

    /// Events that signal a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::TableFailed)
    }

    /// Events that signal a rejected record
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::RecordRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

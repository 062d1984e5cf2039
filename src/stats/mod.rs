//! Descriptive tabulation of validated survey records
//!
//! Frequency distributions and summaries only; hypothesis tests are out of scope.

mod frequency;
mod summary;

pub use frequency::{tabulate, FrequencyRow, FrequencyTable};
pub use summary::Summary;

use crate::schema::{FieldDef, SurveyRecord};

/// Values of one field across records
pub fn column(records: &[SurveyRecord], field: &FieldDef) -> Vec<i64> {
    records.iter().filter_map(|r| r.get(field.name)).collect()
}

//! Frequency distribution tables

use serde::Serialize;
use std::collections::BTreeMap;

use crate::schema::{FieldDef, SurveyRecord};

/// One code of a frequency distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub frequency: u64,
    pub relative: f64,
    pub cumulative: u64,
    pub cumulative_relative: f64,
}

/// Absolute, relative and cumulative frequencies of a categorical column
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrequencyTable {
    pub rows: Vec<FrequencyRow>,
    pub total: u64,
}

impl FrequencyTable {
    /// Counts each code, ordered ascending by code.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
        for value in values {
            *counts.entry(value).or_insert(0) += 1;
        }
        Self::from_counts(counts)
    }

    /// Builds the table from precomputed frequencies, keeping the given order.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (i64, u64)>,
    {
        let counts: Vec<(i64, u64)> = counts.into_iter().collect();
        let total: u64 = counts.iter().map(|(_, n)| n).sum();

        let mut cumulative = 0u64;
        let mut cumulative_relative = 0.0;
        let rows = counts
            .into_iter()
            .map(|(code, frequency)| {
                let relative = if total == 0 {
                    0.0
                } else {
                    frequency as f64 / total as f64
                };
                cumulative += frequency;
                cumulative_relative += relative;
                FrequencyRow {
                    code,
                    label: None,
                    frequency,
                    relative,
                    cumulative,
                    cumulative_relative,
                }
            })
            .collect();

        Self { rows, total }
    }

    /// Attaches the dictionary labels of `field` to each code.
    pub fn with_labels(mut self, field: &FieldDef) -> Self {
        for row in &mut self.rows {
            row.label = field.label(row.code);
        }
        self
    }

    /// Looks up the row for a code
    pub fn get(&self, code: i64) -> Option<&FrequencyRow> {
        self.rows.iter().find(|r| r.code == code)
    }

    /// Code with the highest frequency, smallest code on ties
    pub fn mode(&self) -> Option<i64> {
        self.rows
            .iter()
            .max_by(|a, b| a.frequency.cmp(&b.frequency).then(b.code.cmp(&a.code)))
            .map(|r| r.code)
    }
}

/// Frequency table of one dictionary field over validated records.
pub fn tabulate(records: &[SurveyRecord], field: &FieldDef) -> FrequencyTable {
    FrequencyTable::from_values(records.iter().filter_map(|r| r.get(field.name)))
        .with_labels(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_values_sorted_by_code() {
        let table = FrequencyTable::from_values(vec![3, 1, 3, 2, 3, 1]);
        let codes: Vec<i64> = table.rows.iter().map(|r| r.code).collect();
        assert_eq!(codes, vec![1, 2, 3]);
        assert_eq!(table.total, 6);

        let three = table.get(3).unwrap();
        assert_eq!(three.frequency, 3);
        assert!(approx(three.relative, 0.5));
        assert_eq!(three.cumulative, 6);
        assert!(approx(three.cumulative_relative, 1.0));

        let one = table.get(1).unwrap();
        assert_eq!(one.cumulative, 2);
        assert!(approx(one.cumulative_relative, 2.0 / 6.0));
    }

    #[test]
    fn test_from_counts_keeps_order() {
        let table = FrequencyTable::from_counts(vec![(5, 10), (1, 30)]);
        assert_eq!(table.rows[0].code, 5);
        assert_eq!(table.rows[1].cumulative, 40);
        assert!(approx(table.rows[0].relative, 0.25));
    }

    #[test]
    fn test_empty_input() {
        let table = FrequencyTable::from_values(Vec::new());
        assert!(table.rows.is_empty());
        assert_eq!(table.total, 0);
        assert_eq!(table.mode(), None);

        let zeros = FrequencyTable::from_counts(vec![(1, 0)]);
        assert_eq!(zeros.rows[0].relative, 0.0);
    }

    #[test]
    fn test_mode_prefers_smallest_code_on_tie() {
        let table = FrequencyTable::from_values(vec![4, 2, 4, 2, 7]);
        assert_eq!(table.mode(), Some(2));
    }

    #[test]
    fn test_labels_attached() {
        let gen_hlth = schema::field("GenHlth").unwrap();
        let table = FrequencyTable::from_values(vec![1, 5]).with_labels(gen_hlth);
        assert_eq!(table.get(1).unwrap().label, Some("excellent"));
        assert_eq!(table.get(5).unwrap().label, Some("poor"));

        let bmi = schema::field("BMI").unwrap();
        let table = FrequencyTable::from_values(vec![25]).with_labels(bmi);
        assert_eq!(table.get(25).unwrap().label, None);
    }
}

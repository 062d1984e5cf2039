//! Descriptive summary of a numeric column

use serde::Serialize;

use super::frequency::FrequencyTable;

/// Count, central tendency and range of a column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value, smallest on ties
    pub mode: i64,
    pub min: i64,
    pub max: i64,
}

impl Summary {
    /// Summarizes the values, `None` when there are none.
    pub fn of(values: &[i64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        let sum: f64 = sorted.iter().map(|v| *v as f64).sum();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
        } else {
            sorted[mid] as f64
        };
        let mode = FrequencyTable::from_values(sorted.iter().copied()).mode()?;

        Some(Self {
            count,
            mean: sum / count as f64,
            median,
            mode,
            min: sorted[0],
            max: sorted[count - 1],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn test_odd_count() {
        let s = Summary::of(&[30, 25, 40, 25, 28]).unwrap();
        assert_eq!(s.count, 5);
        assert_eq!(s.median, 28.0);
        assert_eq!(s.mode, 25);
        assert_eq!(s.min, 25);
        assert_eq!(s.max, 40);
        assert!((s.mean - 29.6).abs() < 1e-9);
    }

    #[test]
    fn test_even_count_median_is_midpoint() {
        let s = Summary::of(&[1, 2, 3, 4]).unwrap();
        assert_eq!(s.median, 2.5);
        assert_eq!(s.mode, 1);
    }
}

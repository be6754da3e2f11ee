//! Per-Group Summary Statistics
//!
//! Partitions the observation set by group label and computes one summary
//! record per distinct label. The standard deviation uses the n-1
//! denominator; a single-observation group therefore yields NaN, which is
//! propagated into the standard error rather than trapped.

use std::collections::BTreeMap;

use chartlab_core::Observation;
use serde::{Deserialize, Serialize};

use crate::MIN_SAMPLES_FOR_STD_DEV;

/// Descriptive statistics for one group of observations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Group label
    pub group: String,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator; NaN for n < 2)
    pub std_dev: f64,
    /// Number of observations in the group
    pub count: usize,
    /// Standard error of the mean: std_dev / sqrt(count)
    pub std_error: f64,
}

/// Standard error of the mean for a sample of `count` values.
pub fn standard_error(std_dev: f64, count: usize) -> f64 {
    std_dev / (count as f64).sqrt()
}

/// Compute one [`GroupSummary`] per distinct group label.
///
/// Output is sorted by label, independent of input order. Labels absent
/// from the input produce no row; labels present produce exactly one.
pub fn summarize_groups(observations: &[Observation]) -> Vec<GroupSummary> {
    let mut partitions: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for obs in observations {
        partitions.entry(&obs.group).or_default().push(obs.value);
    }

    partitions
        .into_iter()
        .map(|(group, values)| summarize_one(group, &values))
        .collect()
}

fn summarize_one(group: &str, values: &[f64]) -> GroupSummary {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let std_dev = if count < MIN_SAMPLES_FOR_STD_DEV {
        f64::NAN
    } else {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count - 1) as f64;
        variance.sqrt()
    };

    GroupSummary {
        group: group.to_string(),
        mean,
        std_dev,
        count,
        std_error: standard_error(std_dev, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(group: &str, value: f64) -> Observation {
        Observation {
            group: group.to_string(),
            value,
        }
    }

    #[test]
    fn test_known_values() {
        let observations = vec![obs("A", 2.0), obs("A", 4.0), obs("A", 6.0)];
        let summaries = summarize_groups(&observations);

        assert_eq!(summaries.len(), 1);
        let s = &summaries[0];
        assert_eq!(s.count, 3);
        assert!((s.mean - 4.0).abs() < 1e-12);
        // variance = (4 + 0 + 4) / 2 = 4
        assert!((s.std_dev - 2.0).abs() < 1e-12);
        assert!((s.std_error - 2.0 / 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_one_row_per_distinct_label() {
        let observations = vec![
            obs("B", 1.0),
            obs("A", 2.0),
            obs("B", 3.0),
            obs("C", 4.0),
            obs("A", 5.0),
        ];
        let summaries = summarize_groups(&observations);

        let labels: Vec<&str> = summaries.iter().map(|s| s.group.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert_eq!(summaries[0].count, 2);
        assert_eq!(summaries[1].count, 2);
        assert_eq!(summaries[2].count, 1);
    }

    #[test]
    fn test_std_error_identity() {
        let observations = vec![
            obs("A", 1.0),
            obs("A", 2.0),
            obs("A", 3.0),
            obs("A", 4.0),
        ];
        let summaries = summarize_groups(&observations);

        let s = &summaries[0];
        assert!((s.std_error - s.std_dev / (s.count as f64).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_singleton_group_has_nan_std_dev() {
        let summaries = summarize_groups(&[obs("A", 7.5)]);

        let s = &summaries[0];
        assert_eq!(s.count, 1);
        assert!((s.mean - 7.5).abs() < f64::EPSILON);
        assert!(s.std_dev.is_nan());
        assert!(s.std_error.is_nan());
    }

    #[test]
    fn test_empty_input_yields_no_rows() {
        assert!(summarize_groups(&[]).is_empty());
    }

    #[test]
    fn test_output_sorted_regardless_of_input_order() {
        let forward = vec![obs("A", 1.0), obs("B", 2.0)];
        let reversed = vec![obs("B", 2.0), obs("A", 1.0)];

        let a = summarize_groups(&forward);
        let b = summarize_groups(&reversed);

        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.group, y.group);
            assert_eq!(x.count, y.count);
        }
    }
}

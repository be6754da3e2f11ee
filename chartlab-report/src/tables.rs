//! Terminal Table Formatting
//!
//! Fixed-width, human-readable tables for stdout. Formatting depends only
//! on the data, so identically seeded runs print identical tables.

use chartlab_core::TimeSeriesPoint;
use chartlab_stats::GroupSummary;

/// Format the group summary table: one row per group with mean, sd, n, se.
pub fn format_group_summary_table(summaries: &[GroupSummary]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:>5}  {:>10}  {:>9}  {:>3}  {:>9}\n",
        "group", "mean", "sd", "n", "se"
    ));
    for s in summaries {
        output.push_str(&format!(
            "{:>5}  {:>10.6}  {:>9.6}  {:>3}  {:>9.6}\n",
            s.group, s.mean, s.std_dev, s.count, s.std_error
        ));
    }

    output
}

/// Format the first `rows` points of the series as a date/value table.
pub fn format_series_head(series: &[TimeSeriesPoint], rows: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("{:>10}  {:>10}\n", "date", "value"));
    for point in series.iter().take(rows) {
        output.push_str(&format!(
            "{:>10}  {:>10.6}\n",
            point.date.format("%Y-%m-%d"),
            point.value
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn summary(group: &str, mean: f64) -> GroupSummary {
        GroupSummary {
            group: group.to_string(),
            mean,
            std_dev: 1.5,
            count: 12,
            std_error: 1.5 / 12f64.sqrt(),
        }
    }

    #[test]
    fn test_summary_table_row_count() {
        let summaries = vec![summary("A", 10.0), summary("B", 13.0)];
        let table = format_group_summary_table(&summaries);

        // Header plus one line per group
        assert_eq!(table.lines().count(), 3);
        assert!(table.contains("group"));
        assert!(table.contains("se"));
        assert!(table.contains('A'));
        assert!(table.contains('B'));
    }

    #[test]
    fn test_series_head_truncates() {
        let series: Vec<TimeSeriesPoint> = (1..=12)
            .map(|month| TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2025, month, 1).unwrap(),
                value: month as f64,
            })
            .collect();

        let table = format_series_head(&series, 5);
        assert_eq!(table.lines().count(), 6);
        assert!(table.contains("2025-01-01"));
        assert!(table.contains("2025-05-01"));
        assert!(!table.contains("2025-06-01"));
    }

    #[test]
    fn test_tables_are_deterministic() {
        let summaries = vec![summary("A", 10.0)];
        assert_eq!(
            format_group_summary_table(&summaries),
            format_group_summary_table(&summaries)
        );
    }
}

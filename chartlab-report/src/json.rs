//! JSON Output

use crate::report::RunReport;

/// Generate a prettified JSON report.
///
/// Serializes the run report into machine-readable JSON. Nothing in the
/// demo persists this; it exists for downstream tooling.
pub fn generate_json_report(report: &RunReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportMeta;
    use chartlab_core::TimeSeriesPoint;
    use chartlab_stats::GroupSummary;
    use chrono::NaiveDate;

    #[test]
    fn test_json_round_trip() {
        let report = RunReport {
            meta: ReportMeta::new(42, 12, 1, 1),
            summaries: vec![GroupSummary {
                group: "A".to_string(),
                mean: 10.0,
                std_dev: 1.5,
                count: 12,
                std_error: 1.5 / 12f64.sqrt(),
            }],
            series: vec![TimeSeriesPoint {
                date: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                value: 50.0,
            }],
        };

        let json = generate_json_report(&report).unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.meta.seed, 42);
        assert_eq!(parsed.summaries.len(), 1);
        assert_eq!(parsed.series.len(), 1);
        assert_eq!(parsed.series[0].date, report.series[0].date);
    }

    #[test]
    fn test_json_is_deterministic() {
        let report = RunReport {
            meta: ReportMeta::new(42, 12, 0, 0),
            summaries: Vec::new(),
            series: Vec::new(),
        };

        let a = generate_json_report(&report).unwrap();
        let b = generate_json_report(&report).unwrap();
        assert_eq!(a, b);
    }
}

//! JSON Output

use crate::report::Report;

/// Generate a prettified JSON report.
///
/// Serializes the report document with full-precision values; rounding is
/// the human format's concern.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CaseReport, Report};

    #[test]
    fn test_json_report_round_trips() {
        let report = Report::new(vec![CaseReport {
            case: "scan".to_string(),
            samples: 2,
            median_ms: 1.5,
            mean_ms: 1.5,
            stddev_ms: 0.7071067811865476,
            p90_ms: 2.0,
            min_ms: 1.0,
            max_ms: 2.0,
        }]);

        let json = generate_json_report(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.cases.len(), 1);
        assert_eq!(parsed.cases[0].case, "scan");
        // Full precision survives the round trip.
        assert_eq!(parsed.cases[0].stddev_ms, 0.7071067811865476);
        assert_eq!(parsed.summary.total_samples, 2);
    }
}

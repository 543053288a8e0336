//! CSV Output

use crate::report::Report;

/// Column header row
const CSV_HEADER: &str = "case,samples,median_ms,mean_ms,stddev_ms,p90_ms,min_ms,max_ms";

/// Generate a CSV report, one row per case
///
/// Values are emitted at full precision; rounding is the human format's
/// concern.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::new();
    output.push_str(CSV_HEADER);
    output.push('\n');

    for case in &report.cases {
        output.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            escape_field(&case.case),
            case.samples,
            case.median_ms,
            case.mean_ms,
            case.stddev_ms,
            case.p90_ms,
            case.min_ms,
            case.max_ms
        ));
    }

    output
}

/// Quote a field if it contains a delimiter, quote, or newline
fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

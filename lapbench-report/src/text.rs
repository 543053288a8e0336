//! Human-Readable Output
//!
//! Renders the aligned terminal report: a header row with the legend, then
//! one line per case. Alignment comes from a single column width computed
//! over every case name plus the header token.

use crate::report::Report;

/// Legend printed above the slash-separated statistics columns
pub const LEGEND: &str = "Med/Avg/Stddev/90%/Min/Max";

/// Header token used when the caller does not configure one
pub const DEFAULT_HEADER: &str = "Case";

/// Column width that aligns every case name under the header token
pub fn column_width<'a, I>(names: I, header: &str) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().map(str::len).fold(header.len(), usize::max)
}

/// Format a report for terminal display
pub fn generate_text_report(report: &Report, header: &str) -> String {
    let width = column_width(report.cases.iter().map(|c| c.case.as_str()), header);

    let mut output = String::new();
    output.push_str(&format!("{:<width$} {}\n", header, LEGEND, width = width));
    for case in &report.cases {
        output.push_str(&case.to_stats().format_line(&case.case, width));
        output.push('\n');
    }
    output
}

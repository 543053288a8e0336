//! Recorded Timing Input
//!
//! Parses the `(case_name, elapsed_ms)` pair stream an external timing
//! harness writes: one pair per line, comma- or whitespace-separated. Blank
//! lines and `#` comments are ignored; anything else that fails to parse is
//! reported with its line number.

use anyhow::Context;

/// One recorded timing: case name and elapsed milliseconds
pub type Record = (String, f64);

/// Parse a stream of recorded timings, in recording order
pub fn parse_records(text: &str) -> anyhow::Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (case, value) = split_record(line).ok_or_else(|| {
            anyhow::anyhow!(
                "line {}: expected 'case_name,elapsed_ms', got '{}'",
                idx + 1,
                line
            )
        })?;
        let elapsed_ms: f64 = value
            .parse()
            .with_context(|| format!("line {}: invalid elapsed time '{}'", idx + 1, value))?;

        records.push((case.to_string(), elapsed_ms));
    }
    Ok(records)
}

/// Split one line into name and value fields
///
/// Comma-separated takes precedence; otherwise the line must be exactly two
/// whitespace-separated tokens.
fn split_record(line: &str) -> Option<(&str, &str)> {
    if let Some((case, value)) = line.split_once(',') {
        let case = case.trim();
        let value = value.trim();
        return (!case.is_empty() && !value.is_empty()).then_some((case, value));
    }

    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(case), Some(value), None) => Some((case, value)),
        _ => None,
    }
}

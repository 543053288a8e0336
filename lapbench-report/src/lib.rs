#![warn(missing_docs)]
//! Lapbench Report - Output Generation
//!
//! Turns computed statistics into report documents and renders them:
//! - Human-readable aligned text (terminal)
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)

mod csv;
mod json;
mod report;
mod text;

pub use csv::generate_csv_report;
pub use json::generate_json_report;
pub use report::{
    CaseReport, Report, ReportMeta, ReportSummary, SCHEMA_VERSION, build_report,
};
pub use text::{DEFAULT_HEADER, LEGEND, column_width, generate_text_report};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

//! Report Data Structures

use chrono::{DateTime, Utc};
use lapbench_stats::{StatsError, StatsReporter, StatsResult, compute_stats};
use serde::{Deserialize, Serialize};

/// Version of the report document layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete timing report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// When and by what the report was generated
    pub meta: ReportMeta,
    /// Per-case statistics, in registration order
    pub cases: Vec<CaseReport>,
    /// Totals over the included cases
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Version of the report document layout
    pub schema_version: u32,
    /// Crate version that produced the report
    pub version: String,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
}

/// Report totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Cases included in the report
    pub total_cases: usize,
    /// Samples behind all included cases
    pub total_samples: usize,
}

/// Statistics for one case, in milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseReport {
    /// Case name
    pub case: String,
    /// Number of samples behind the statistics
    pub samples: usize,
    /// Median (1-based index arithmetic)
    pub median_ms: f64,
    /// Arithmetic mean
    pub mean_ms: f64,
    /// Sample standard deviation
    pub stddev_ms: f64,
    /// 90th percentile by the fixed index rule
    pub p90_ms: f64,
    /// Smallest sample
    pub min_ms: f64,
    /// Largest sample
    pub max_ms: f64,
}

impl CaseReport {
    /// Build a report entry from a computed snapshot
    pub fn from_stats(case: impl Into<String>, stats: &StatsResult) -> Self {
        Self {
            case: case.into(),
            samples: stats.samples,
            median_ms: stats.median,
            mean_ms: stats.mean,
            stddev_ms: stats.std_dev,
            p90_ms: stats.p90,
            min_ms: stats.min,
            max_ms: stats.max,
        }
    }

    /// Rebuild the snapshot this entry was created from
    ///
    /// Used by the text renderer so the report line format has a single
    /// definition.
    pub fn to_stats(&self) -> StatsResult {
        StatsResult {
            samples: self.samples,
            median: self.median_ms,
            mean: self.mean_ms,
            std_dev: self.stddev_ms,
            p90: self.p90_ms,
            min: self.min_ms,
            max: self.max_ms,
        }
    }
}

impl ReportMeta {
    /// Metadata stamped with the current time and crate version
    pub fn now() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
        }
    }
}

impl Report {
    /// Assemble a report document from per-case entries
    ///
    /// The summary counts only the entries actually present, so callers that
    /// skip incomplete cases get totals matching what the report shows.
    pub fn new(cases: Vec<CaseReport>) -> Self {
        let summary = ReportSummary {
            total_cases: cases.len(),
            total_samples: cases.iter().map(|c| c.samples).sum(),
        };
        Self {
            meta: ReportMeta::now(),
            cases,
            summary,
        }
    }
}

/// Build the report document for every case in the reporter
///
/// Cases appear in registration order. Fails on the first case whose
/// statistics cannot be computed; callers that would rather skip such cases
/// assemble the entries themselves and use [`Report::new`].
pub fn build_report(reporter: &StatsReporter) -> Result<Report, StatsError> {
    let mut cases = Vec::with_capacity(reporter.len());
    for set in reporter.cases() {
        let stats = compute_stats(set)?;
        cases.push(CaseReport::from_stats(set.name(), &stats));
    }
    Ok(Report::new(cases))
}

//! Summary Statistics
//!
//! Computes the six-statistic snapshot one report line prints. A snapshot is
//! derived from a sample set at a point in time, never mutated, and discarded
//! once its line is emitted.

use crate::REPORT_PERCENTILE;
use crate::error::StatsError;
use crate::sample::SampleSet;

/// Read-only statistics snapshot for one case
#[derive(Debug, Clone)]
pub struct StatsResult {
    /// Number of samples the snapshot was computed from
    pub samples: usize,
    /// Median via 1-based index arithmetic (see [`SampleSet::median`])
    pub median: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (`n - 1` denominator)
    pub std_dev: f64,
    /// 90th percentile by the fixed index rule
    pub p90: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
}

/// Compute the full snapshot for a sample set
///
/// Fails with `EmptySampleSet` for zero samples and `InsufficientSamples`
/// for exactly one, because the standard deviation divides by `n - 1`.
pub fn compute_stats(set: &SampleSet) -> Result<StatsResult, StatsError> {
    Ok(StatsResult {
        samples: set.len(),
        median: set.median()?,
        mean: set.mean()?,
        std_dev: set.std_dev()?,
        p90: set.percentile(REPORT_PERCENTILE)?,
        min: set.min()?,
        max: set.max()?,
    })
}

impl StatsResult {
    /// Render the aligned report line for this snapshot
    ///
    /// The case name is left-padded to `column_width`; the six statistics
    /// follow slash-separated, each rounded to two decimals.
    pub fn format_line(&self, name: &str, column_width: usize) -> String {
        format!(
            "{:<width$} {:.2}/{:.2}/{:.2}/{:.2}/{:.2}/{:.2}",
            name,
            self.median,
            self.mean,
            self.std_dev,
            self.p90,
            self.min,
            self.max,
            width = column_width
        )
    }
}

#![warn(missing_docs)]
//! Lapbench Statistical Engine
//!
//! Aggregates repeated millisecond timings per named benchmark case and
//! computes the descriptive statistics a report line prints:
//! - Median and mean
//! - Sample standard deviation
//! - Percentile selection via a fixed index rule
//! - Min/max extrema
//!
//! All state lives in an explicit [`StatsReporter`] owned by the reporting
//! run; every failure surfaces synchronously as a [`StatsError`].

mod error;
mod percentile;
mod reporter;
mod sample;
mod summary;

pub use error::StatsError;
pub use percentile::{compute_percentile, percentile_index};
pub use reporter::StatsReporter;
pub use sample::SampleSet;
pub use summary::{StatsResult, compute_stats};

/// Percentile printed in the standard report columns
pub const REPORT_PERCENTILE: f64 = 90.0;

/// Fewest samples from which a standard deviation can be computed
pub const MIN_STDDEV_SAMPLES: usize = 2;

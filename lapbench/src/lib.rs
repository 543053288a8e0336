#![warn(missing_docs)]
//! # Lapbench
//!
//! Timing-statistics reporter for repeated benchmark rounds ("laps").
//!
//! An external harness times a named case over and over; lapbench ingests
//! the per-round elapsed-millisecond samples, computes descriptive
//! statistics (median, mean, sample standard deviation, 90th percentile,
//! min, max) with a fixed set of formulas, and renders an aligned
//! plain-text report, or JSON/CSV for machines.
//!
//! ## Quick Start
//!
//! ```
//! use lapbench::{DEFAULT_HEADER, StatsReporter};
//!
//! let mut reporter = StatsReporter::new();
//! for ms in [12.0, 11.5, 13.2] {
//!     reporter.record("select_all", ms)?;
//! }
//!
//! let width = reporter.column_width(DEFAULT_HEADER);
//! println!("{}", reporter.report(width)?);
//! # Ok::<(), lapbench::StatsError>(())
//! ```
//!
//! ## Timing with a source
//!
//! Anything that can execute a case and report a duration fits behind the
//! [`TimingSource`] seam; [`Runner`] drives it for a fixed number of rounds:
//!
//! ```
//! use lapbench::{FnSource, Runner, StatsReporter};
//!
//! let mut source = FnSource::new(|_case: &str| {
//!     // one round of the case
//!     Ok(())
//! });
//! let mut reporter = StatsReporter::new();
//! Runner::new(5).run(&mut source, &["noop"], &mut reporter, |_| {})?;
//!
//! assert_eq!(reporter.get("noop").unwrap().len(), 5);
//! # Ok::<(), lapbench::RunnerError>(())
//! ```

// Re-export stats types
pub use lapbench_stats::{
    MIN_STDDEV_SAMPLES, REPORT_PERCENTILE, SampleSet, StatsError, StatsReporter, StatsResult,
    compute_percentile, compute_stats, percentile_index,
};

// Re-export the timing harness
pub use lapbench_core::{
    DEFAULT_ROUNDS, FnSource, RoundRecord, Runner, RunnerError, SourceError, Stopwatch,
    TimingSource, duration_ms,
};

// Re-export report documents and renderers
pub use lapbench_report::{
    CaseReport, DEFAULT_HEADER, LEGEND, OutputFormat, Report, ReportMeta, ReportSummary,
    SCHEMA_VERSION, build_report, column_width, generate_csv_report, generate_json_report,
    generate_text_report,
};

/// Run the lapbench CLI.
///
/// Call this from a binary's `main()`:
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     lapbench::run()
/// }
/// ```
pub use lapbench_cli::run;

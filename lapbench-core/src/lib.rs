#![warn(missing_docs)]
//! Lapbench Core - Timing Harness
//!
//! This crate provides the execution side of a reporting run:
//! - `TimingSource`, the adapter between the runner and whatever actually
//!   executes a benchmark case
//! - `Runner` for fixed-round execution feeding a `StatsReporter`
//! - Wall-clock stopwatch helpers at millisecond granularity
//!
//! Everything is single-threaded and synchronous; the only state is the
//! reporter the caller passes in.

mod runner;
mod source;
mod stopwatch;

pub use runner::{RoundRecord, Runner, RunnerError};
pub use source::{FnSource, SourceError, TimingSource};
pub use stopwatch::{Stopwatch, duration_ms};

/// Rounds per case when the caller does not ask for more
pub const DEFAULT_ROUNDS: usize = 1;

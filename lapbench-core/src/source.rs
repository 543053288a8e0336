//! Timing Sources
//!
//! A `TimingSource` sits between the runner and whatever actually executes a
//! benchmark case: an in-process closure, an external process, a database
//! connection. The runner only ever sees case names going in and durations
//! coming out, so the statistics stay decoupled from any specific tool.

use std::time::Duration;

use crate::stopwatch::Stopwatch;

/// Error from a timing source run
#[derive(Debug, Clone, thiserror::Error)]
#[error("timing source failed for case '{case}': {message}")]
pub struct SourceError {
    /// Case that was running
    pub case: String,
    /// What went wrong, in the source's own words
    pub message: String,
}

impl SourceError {
    /// Create a source error for the named case
    pub fn new(case: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            case: case.into(),
            message: message.into(),
        }
    }
}

/// Executes named benchmark cases and reports how long one run took
pub trait TimingSource {
    /// Execute the named case once and return its elapsed time
    fn run(&mut self, case: &str) -> Result<Duration, SourceError>;
}

/// Timing source backed by a closure
///
/// The closure performs one round of the named case; the source times it on
/// a wall-clock stopwatch. Handy for in-process benchmarks and tests.
pub struct FnSource<F> {
    work: F,
}

impl<F> FnSource<F>
where
    F: FnMut(&str) -> Result<(), SourceError>,
{
    /// Wrap a closure that performs one round of the named case
    pub fn new(work: F) -> Self {
        Self { work }
    }
}

impl<F> TimingSource for FnSource<F>
where
    F: FnMut(&str) -> Result<(), SourceError>,
{
    fn run(&mut self, case: &str) -> Result<Duration, SourceError> {
        let watch = Stopwatch::start();
        (self.work)(case)?;
        Ok(watch.elapsed())
    }
}

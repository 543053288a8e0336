//! Wall-Clock Timing
//!
//! Millisecond-granularity timing for benchmark rounds. `std::time::Instant`
//! is monotonic and cheap at this granularity; there is no need for cycle
//! counters when a single round spans milliseconds.

use std::time::{Duration, Instant};

/// Stopwatch for timing one benchmark round
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    /// Start a new stopwatch
    #[inline]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time since the stopwatch started
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time as the fractional milliseconds the reporter records
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        duration_ms(self.elapsed())
    }
}

/// Convert a duration to fractional milliseconds
#[inline]
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

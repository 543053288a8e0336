//! Round Runner
//!
//! Drives a timing source through every case for a fixed number of rounds
//! and records the elapsed milliseconds into a stats reporter. Cases run to
//! completion one at a time; the first failed round aborts the run.

use lapbench_stats::{StatsError, StatsReporter};

use crate::DEFAULT_ROUNDS;
use crate::source::{SourceError, TimingSource};
use crate::stopwatch::duration_ms;

/// One completed round, handed to the progress observer
#[derive(Debug, Clone)]
pub struct RoundRecord<'a> {
    /// Case that ran
    pub case: &'a str,
    /// 1-based round number within the case
    pub round: usize,
    /// Elapsed milliseconds for this round
    pub elapsed_ms: f64,
}

/// Errors from a reporting run
#[derive(Debug, Clone, thiserror::Error)]
pub enum RunnerError {
    /// The timing source failed a round
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The reporter rejected a recorded sample
    #[error(transparent)]
    Stats(#[from] StatsError),
}

/// Fixed-round driver for a set of benchmark cases
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    rounds: usize,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl Runner {
    /// Create a runner that executes every case `rounds` times
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    /// Rounds each case will run
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Run every case for the configured rounds, recording into `reporter`
    ///
    /// The observer is called once per completed round, in execution order,
    /// before the sample is recorded anywhere else; harnesses use it to echo
    /// per-round progress lines.
    pub fn run<S, O>(
        &self,
        source: &mut S,
        cases: &[&str],
        reporter: &mut StatsReporter,
        mut observer: O,
    ) -> Result<(), RunnerError>
    where
        S: TimingSource,
        O: FnMut(&RoundRecord<'_>),
    {
        for case in cases {
            for round in 1..=self.rounds {
                let elapsed = source.run(case)?;
                let elapsed_ms = duration_ms(elapsed);
                observer(&RoundRecord {
                    case,
                    round,
                    elapsed_ms,
                });
                reporter.record(case, elapsed_ms)?;
            }
        }
        Ok(())
    }
}

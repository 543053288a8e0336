//! Stats Reporter
//!
//! The reporter owns the case-name to sample-set mapping for one reporting
//! run. It is an explicit value passed to whoever records timings; there is
//! no ambient or global accumulator. Cases render in first-registration
//! order so repeated runs diff cleanly.

use std::collections::HashMap;

use crate::error::StatsError;
use crate::sample::{SampleSet, is_valid_sample};
use crate::summary::{StatsResult, compute_stats};

/// Accumulates timing samples per named case and renders the report lines
#[derive(Debug, Clone, Default)]
pub struct StatsReporter {
    sets: Vec<SampleSet>,
    index: HashMap<String, usize>,
}

impl StatsReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a case without recording a sample
    ///
    /// Idempotent. Recording under a new name registers it implicitly, so
    /// this is only needed for cases that should appear in listings before
    /// any timing arrives.
    pub fn register(&mut self, case: &str) {
        self.ensure_case(case);
    }

    /// Append one millisecond sample to the named case
    ///
    /// Creates the case on first use. An invalid sample fails without
    /// registering the case or touching its samples.
    pub fn record(&mut self, case: &str, sample_ms: f64) -> Result<(), StatsError> {
        if !is_valid_sample(sample_ms) {
            return Err(StatsError::InvalidSample {
                case: case.to_string(),
                value: sample_ms,
            });
        }
        let idx = self.ensure_case(case);
        self.sets[idx].push(sample_ms)
    }

    /// Look up the sample set for a case
    pub fn get(&self, case: &str) -> Option<&SampleSet> {
        self.index.get(case).map(|&idx| &self.sets[idx])
    }

    /// Compute the statistics snapshot for one case
    ///
    /// Fails with `UnknownCase` for names never registered, and propagates
    /// `EmptySampleSet` / `InsufficientSamples` from the computation.
    pub fn compute(&self, case: &str) -> Result<StatsResult, StatsError> {
        let set = self.get(case).ok_or_else(|| StatsError::UnknownCase {
            case: case.to_string(),
        })?;
        compute_stats(set)
    }

    /// Sample sets in first-registration order
    pub fn cases(&self) -> impl Iterator<Item = &SampleSet> {
        self.sets.iter()
    }

    /// Number of registered cases
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// True while no case has been registered
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total samples recorded across all cases
    pub fn total_samples(&self) -> usize {
        self.sets.iter().map(SampleSet::len).sum()
    }

    /// Column width that aligns every case name under a header token
    pub fn column_width(&self, header: &str) -> usize {
        self.sets
            .iter()
            .map(|set| set.name().len())
            .fold(header.len(), usize::max)
    }

    /// Render one aligned report line per case, in registration order
    ///
    /// Lines are newline-joined with no trailing newline. Fails on the first
    /// case whose statistics cannot be computed; the caller decides whether
    /// to skip that case or abort.
    pub fn report(&self, column_width: usize) -> Result<String, StatsError> {
        let mut lines = Vec::with_capacity(self.sets.len());
        for set in &self.sets {
            let stats = compute_stats(set)?;
            lines.push(stats.format_line(set.name(), column_width));
        }
        Ok(lines.join("\n"))
    }

    fn ensure_case(&mut self, case: &str) -> usize {
        if let Some(&idx) = self.index.get(case) {
            return idx;
        }
        let idx = self.sets.len();
        self.index.insert(case.to_string(), idx);
        self.sets.push(SampleSet::new(case));
        idx
    }
}

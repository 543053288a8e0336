//! Sample Sets
//!
//! A `SampleSet` holds the raw millisecond timings recorded for one named
//! benchmark case. Samples are append-only; statistics that need order sort
//! a copy and leave the recorded sequence untouched.

use crate::MIN_STDDEV_SAMPLES;
use crate::error::StatsError;
use crate::percentile::compute_percentile;

/// True for samples the reporter accepts: finite and non-negative
pub(crate) fn is_valid_sample(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Ordered, append-only collection of timing samples for one case
#[derive(Debug, Clone)]
pub struct SampleSet {
    name: String,
    samples: Vec<f64>,
}

impl SampleSet {
    /// Create an empty sample set for the named case
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            samples: Vec::new(),
        }
    }

    /// Case name this set belongs to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of recorded samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True while no sample has been recorded
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Recorded samples, in recording order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Append one sample in milliseconds
    ///
    /// Negative, NaN, and infinite values are rejected and the set is left
    /// unchanged.
    pub fn push(&mut self, sample_ms: f64) -> Result<(), StatsError> {
        if !is_valid_sample(sample_ms) {
            return Err(StatsError::InvalidSample {
                case: self.name.clone(),
                value: sample_ms,
            });
        }
        self.samples.push(sample_ms);
        Ok(())
    }

    /// Median via 1-based index arithmetic
    ///
    /// Odd counts take element `(n+1)/2`; even counts average elements `n/2`
    /// and `(n+1)/2`. Integer division collapses both even-count indices onto
    /// the lower middle, so `[1, 2, 3, 4]` reports 2.0 rather than the
    /// textbook 2.5. That quirk is part of the report contract and is kept.
    pub fn median(&self) -> Result<f64, StatsError> {
        let sorted = self.sorted()?;
        let n = sorted.len();
        if n % 2 == 1 {
            Ok(sorted[(n + 1) / 2 - 1])
        } else {
            Ok((sorted[n / 2 - 1] + sorted[(n + 1) / 2 - 1]) / 2.0)
        }
    }

    /// Arithmetic mean
    pub fn mean(&self) -> Result<f64, StatsError> {
        if self.samples.is_empty() {
            return Err(self.empty_error());
        }
        Ok(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Sample variance with the `n - 1` denominator
    ///
    /// A single sample would divide by zero, so it fails with
    /// `InsufficientSamples` instead of producing a NaN column.
    pub fn sample_variance(&self) -> Result<f64, StatsError> {
        if self.samples.is_empty() {
            return Err(self.empty_error());
        }
        if self.samples.len() < MIN_STDDEV_SAMPLES {
            return Err(StatsError::InsufficientSamples {
                case: self.name.clone(),
                needed: MIN_STDDEV_SAMPLES,
                got: self.samples.len(),
            });
        }
        let mean = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
        Ok(self.samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / (self.samples.len() - 1) as f64)
    }

    /// Sample standard deviation (square root of the sample variance)
    pub fn std_dev(&self) -> Result<f64, StatsError> {
        Ok(self.sample_variance()?.sqrt())
    }

    /// Percentile by the fixed index rule (see [`crate::percentile_index`])
    pub fn percentile(&self, percentile: f64) -> Result<f64, StatsError> {
        compute_percentile(&self.samples, percentile).ok_or_else(|| self.empty_error())
    }

    /// Smallest sample
    pub fn min(&self) -> Result<f64, StatsError> {
        self.samples
            .iter()
            .cloned()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| self.empty_error())
    }

    /// Largest sample
    pub fn max(&self) -> Result<f64, StatsError> {
        self.samples
            .iter()
            .cloned()
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .ok_or_else(|| self.empty_error())
    }

    fn sorted(&self) -> Result<Vec<f64>, StatsError> {
        if self.samples.is_empty() {
            return Err(self.empty_error());
        }
        let mut sorted = self.samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        Ok(sorted)
    }

    fn empty_error(&self) -> StatsError {
        StatsError::EmptySampleSet {
            case: self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(samples: &[f64]) -> SampleSet {
        let mut set = SampleSet::new("case");
        for &s in samples {
            set.push(s).unwrap();
        }
        set
    }

    #[test]
    fn test_median_odd_count() {
        // Sorted [1, 3, 5]: element (3+1)/2 = 2 (1-based) is 3.
        let set = set_with(&[5.0, 3.0, 1.0]);
        assert!((set.median().unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_median_even_count_collapses_to_lower_middle() {
        // Sorted [1, 2, 3, 4]: 1-based indices 4/2 = 2 and (4+1)/2 = 2 both
        // land on 2, so the "average" is 2.0, not the textbook 2.5.
        let set = set_with(&[4.0, 1.0, 3.0, 2.0]);
        assert!((set.median().unwrap() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mean() {
        let set = set_with(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((set.mean().unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_std_dev_uses_sample_variance() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 denominator is 32/7.
        let set = set_with(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((set.std_dev().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_single_sample_fails() {
        let set = set_with(&[42.0]);
        assert!(matches!(
            set.std_dev(),
            Err(StatsError::InsufficientSamples { needed: 2, got: 1, .. })
        ));
    }

    #[test]
    fn test_single_sample_point_statistics() {
        let set = set_with(&[42.0]);
        assert!((set.median().unwrap() - 42.0).abs() < f64::EPSILON);
        assert!((set.mean().unwrap() - 42.0).abs() < f64::EPSILON);
        assert!((set.min().unwrap() - 42.0).abs() < f64::EPSILON);
        assert!((set.max().unwrap() - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_push_rejects_invalid_samples() {
        let mut set = SampleSet::new("case");
        set.push(1.5).unwrap();

        for bad in [-0.1, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = set.push(bad).unwrap_err();
            assert!(matches!(err, StatsError::InvalidSample { .. }));
        }

        // Rejected samples must not touch the set.
        assert_eq!(set.len(), 1);
        assert_eq!(set.samples(), &[1.5]);
    }

    #[test]
    fn test_zero_is_a_valid_sample() {
        let mut set = SampleSet::new("case");
        set.push(0.0).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_set_statistics_fail() {
        let set = SampleSet::new("case");
        assert!(matches!(set.median(), Err(StatsError::EmptySampleSet { .. })));
        assert!(matches!(set.mean(), Err(StatsError::EmptySampleSet { .. })));
        assert!(matches!(set.min(), Err(StatsError::EmptySampleSet { .. })));
        assert!(matches!(set.max(), Err(StatsError::EmptySampleSet { .. })));
        assert!(matches!(
            set.percentile(90.0),
            Err(StatsError::EmptySampleSet { .. })
        ));
    }

    #[test]
    fn test_statistics_ignore_recording_order() {
        let a = set_with(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = set_with(&[5.0, 3.0, 1.0, 4.0, 2.0]);
        assert_eq!(a.median().unwrap(), b.median().unwrap());
        assert_eq!(a.mean().unwrap(), b.mean().unwrap());
        assert_eq!(a.std_dev().unwrap(), b.std_dev().unwrap());
        assert_eq!(a.percentile(90.0).unwrap(), b.percentile(90.0).unwrap());
        assert_eq!(a.min().unwrap(), b.min().unwrap());
        assert_eq!(a.max().unwrap(), b.max().unwrap());
    }
}

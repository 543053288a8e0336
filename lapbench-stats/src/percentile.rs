//! Percentile Selection
//!
//! Percentiles are selected by a fixed index rule, not by interpolation
//! between ranks: the reported value is always one of the recorded samples.
//! The rule is part of the report contract and must not drift.

/// 0-based index of the percentile element in an ascending-sorted list
///
/// The rule is `floor(min(p/100 * n + 0.5, n - 1))`. `count` must be
/// non-zero.
///
/// # Examples
///
/// ```
/// # use lapbench_stats::percentile_index;
/// // Ten samples, 90th percentile: 0.9 * 10 + 0.5 = 9.5, capped at 9.
/// assert_eq!(percentile_index(10, 90.0), 9);
/// assert_eq!(percentile_index(10, 50.0), 5);
/// assert_eq!(percentile_index(1, 90.0), 0);
/// ```
pub fn percentile_index(count: usize, percentile: f64) -> usize {
    let n = count as f64;
    let rank = (percentile / 100.0) * n + 0.5;
    rank.min(n - 1.0).floor() as usize
}

/// Select the percentile sample from an unsorted slice
///
/// Sorts a copy ascending and returns the element at the percentile index,
/// or `None` when the slice is empty.
pub fn compute_percentile(samples: &[f64], percentile: f64) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Some(sorted[percentile_index(sorted.len(), percentile)])
}

//! Error Taxonomy
//!
//! Every failure in this crate surfaces synchronously as a `StatsError`;
//! nothing is retried or swallowed. The caller decides whether a failing
//! case aborts the report or is skipped.

/// Errors from recording samples or computing statistics
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// Sample was negative, NaN, or infinite
    #[error("invalid sample {value} for case '{case}' (samples must be finite and non-negative)")]
    InvalidSample {
        /// Case the sample was destined for
        case: String,
        /// The rejected value
        value: f64,
    },

    /// Statistics requested for a name that was never registered
    #[error("unknown case '{case}'")]
    UnknownCase {
        /// The unrecognized name
        case: String,
    },

    /// Statistics requested for a case with zero samples
    #[error("case '{case}' has no samples")]
    EmptySampleSet {
        /// Case that is still empty
        case: String,
    },

    /// Statistic needs more samples than were recorded
    #[error("case '{case}' needs at least {needed} samples, got {got}")]
    InsufficientSamples {
        /// Case that fell short
        case: String,
        /// Samples the statistic requires
        needed: usize,
        /// Samples actually recorded
        got: usize,
    },
}

impl StatsError {
    /// Case name the error refers to
    pub fn case(&self) -> &str {
        match self {
            StatsError::InvalidSample { case, .. }
            | StatsError::UnknownCase { case }
            | StatsError::EmptySampleSet { case }
            | StatsError::InsufficientSamples { case, .. } => case,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_case() {
        let err = StatsError::InvalidSample {
            case: "scan".to_string(),
            value: -1.0,
        };
        assert!(err.to_string().contains("scan"));
        assert!(err.to_string().contains("-1"));

        let err = StatsError::InsufficientSamples {
            case: "scan".to_string(),
            needed: 2,
            got: 1,
        };
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_case_accessor() {
        let err = StatsError::UnknownCase {
            case: "missing".to_string(),
        };
        assert_eq!(err.case(), "missing");
    }
}

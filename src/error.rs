//! Error type for descriptive statistics.

/// Reasons a statistics operation rejects its input.
///
/// Every public operation validates at its boundary and returns the first
/// problem it finds; no partial results are produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// The sample slice is empty; the statistic is undefined for zero samples.
    EmptyInput,

    /// A sample is NaN or infinite.
    NonFiniteInput {
        /// Position of the first offending sample.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// The mean supplied to [`variance`](crate::stats::variance) is NaN or infinite.
    NonFiniteMean(f64),

    /// Finite samples produced a NaN or infinite intermediate result.
    Overflow {
        /// Name of the statistic that overflowed.
        statistic: &'static str,
    },
}

impl std::fmt::Display for StatsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsError::EmptyInput => write!(f, "empty input: at least one sample is required"),
            StatsError::NonFiniteInput { index, value } => {
                write!(f, "non-finite sample at index {index}: {value}")
            }
            StatsError::NonFiniteMean(mean) => write!(f, "non-finite mean: {mean}"),
            StatsError::Overflow { statistic } => {
                write!(f, "{statistic} overflowed the f64 range")
            }
        }
    }
}

impl std::error::Error for StatsError {}

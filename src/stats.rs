//! Descriptive statistics over an in-memory slice of samples.
//!
//! Every function here is pure: it borrows the caller's slice immutably and
//! returns a fresh value. Operations that are undefined for zero samples, or
//! that would be silently poisoned by NaN/±∞, validate their input and return
//! a [`StatsError`] instead.
//!
//! # Algorithms
//!
//! - **Sum**: left-to-right accumulation starting from `0.0`.
//! - **Variance**: two-pass population variance. The mean is computed first
//!   and passed in; the second pass accumulates squared deviations and
//!   divides by `n`.
//! - **Median**: sorts a copy of the input. The default [`MedianRule::Swapped`]
//!   picks the single element at `n / 2` for even `n` and averages the two
//!   elements around `n / 2` for odd `n`. [`MedianRule::Conventional`] gives
//!   the textbook definition.

use crate::error::StatsError;
use crate::validate;

/// Aggregate result of one statistics computation.
///
/// With the `serde` feature the fields serialize as
/// `count, sum, mean, median, min, max, variance, standardDeviation`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StatisticsRecord {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic sum of the samples.
    pub sum: f64,
    /// `sum / count`.
    pub mean: f64,
    /// Median under the engine's [`MedianRule`].
    pub median: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Population variance (divisor `count`).
    pub variance: f64,
    /// `sqrt(variance)`.
    pub standard_deviation: f64,
}

/// How [`median_with`] treats odd and even sample counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum MedianRule {
    /// Even `n`: `sorted[n / 2]`. Odd `n`: mean of `sorted[n / 2 - 1]` and
    /// `sorted[n / 2]`. A single sample is its own median.
    ///
    /// The parity branches are inverted relative to the textbook median.
    #[default]
    Swapped,
    /// Odd `n`: the middle element. Even `n`: mean of the two middle elements.
    Conventional,
}

/// Configurable entry point producing a [`StatisticsRecord`].
///
/// # Examples
/// ```
/// use u_descriptive::stats::{MedianRule, StatisticsEngine};
///
/// let engine = StatisticsEngine::new().with_median_rule(MedianRule::Conventional);
/// let record = engine.compute(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0]).unwrap();
/// assert_eq!(record.median, 5.0);
/// assert_eq!(record.count, 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatisticsEngine {
    median_rule: MedianRule,
}

impl StatisticsEngine {
    /// Creates an engine using [`MedianRule::Swapped`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of this engine using `rule` for the median.
    #[must_use]
    pub fn with_median_rule(self, rule: MedianRule) -> Self {
        Self { median_rule: rule }
    }

    /// The median rule this engine applies.
    pub fn median_rule(&self) -> MedianRule {
        self.median_rule
    }

    /// Computes every field of a [`StatisticsRecord`] for `data`.
    ///
    /// # Complexity
    /// Time: O(n log n) (dominated by the median sort), Space: O(n)
    ///
    /// # Errors
    /// - [`StatsError::EmptyInput`] if `data` is empty.
    /// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
    /// - [`StatsError::Overflow`] if the sum or variance leaves the `f64` range.
    pub fn compute(&self, data: &[f64]) -> Result<StatisticsRecord, StatsError> {
        validate::samples(data)?;

        let (min, max) = extrema(data);
        let median = median_of_sorted(&sorted_copy(data), self.median_rule);
        let count = data.len();
        let sum = validate::result("sum", sum(data))?;
        let mean = sum / count as f64;
        let variance = validate::result("variance", squared_deviation_mean(data, mean))?;
        let standard_deviation = variance.sqrt();

        let record = StatisticsRecord {
            count,
            sum,
            mean,
            median,
            min,
            max,
            variance,
            standard_deviation,
        };
        log::debug!("computed statistics over {count} samples: {record:?}");
        Ok(record)
    }
}

/// Computes the full [`StatisticsRecord`] with the default engine.
///
/// Equivalent to `StatisticsEngine::default().compute(data)`.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
/// - [`StatsError::Overflow`] if the sum or variance leaves the `f64` range.
///
/// # Examples
/// ```
/// use u_descriptive::stats::compute_statistics;
///
/// let s = compute_statistics(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0]).unwrap();
/// assert_eq!(s.count, 9);
/// assert_eq!(s.sum, 39.0);
/// assert_eq!(s.min, 2.0);
/// assert_eq!(s.max, 7.0);
/// assert!((s.variance - 2.6666666666666665).abs() < 1e-15);
/// ```
pub fn compute_statistics(data: &[f64]) -> Result<StatisticsRecord, StatsError> {
    StatisticsEngine::default().compute(data)
}

/// Sums the samples in input order.
///
/// Empty input sums to `0.0`. No validation is performed, so a NaN sample
/// yields NaN and large finite samples may sum to ±∞.
///
/// # Examples
/// ```
/// use u_descriptive::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    data.iter().fold(0.0, |acc, &x| acc + x)
}

/// Computes the arithmetic mean, `sum / count`.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
/// - [`StatsError::Overflow`] if the sum leaves the `f64` range.
pub fn mean(data: &[f64]) -> Result<f64, StatsError> {
    validate::samples(data)?;
    let total = validate::result("sum", sum(data))?;
    Ok(total / data.len() as f64)
}

/// Computes the median with [`MedianRule::Swapped`] without mutating `data`.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
///
/// # Examples
/// ```
/// use u_descriptive::stats::median;
/// // Even length: sorted[n / 2].
/// assert_eq!(median(&[3.0, 2.0, 5.0, 6.0, 2.0, 7.0, 4.0, 2.0, 7.0, 5.0]), Ok(5.0));
/// // Odd length: mean of sorted[n / 2 - 1] and sorted[n / 2].
/// assert_eq!(median(&[1.0, 2.0, 3.0]), Ok(1.5));
/// ```
pub fn median(data: &[f64]) -> Result<f64, StatsError> {
    median_with(data, MedianRule::Swapped)
}

/// Computes the median under an explicit [`MedianRule`] without mutating `data`.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
///
/// # Examples
/// ```
/// use u_descriptive::stats::{median_with, MedianRule};
/// assert_eq!(median_with(&[1.0, 2.0, 3.0], MedianRule::Conventional), Ok(2.0));
/// assert_eq!(median_with(&[4.0, 1.0, 3.0, 2.0], MedianRule::Conventional), Ok(2.5));
/// ```
pub fn median_with(data: &[f64], rule: MedianRule) -> Result<f64, StatsError> {
    validate::samples(data)?;
    Ok(median_of_sorted(&sorted_copy(data), rule))
}

/// Returns the smallest sample.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
pub fn min(data: &[f64]) -> Result<f64, StatsError> {
    validate::samples(data)?;
    Ok(extrema(data).0)
}

/// Returns the largest sample.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
pub fn max(data: &[f64]) -> Result<f64, StatsError> {
    validate::samples(data)?;
    Ok(extrema(data).1)
}

/// Computes the population variance `Σ(mean − x)² / n` around a
/// caller-supplied mean.
///
/// The mean is not recomputed; pass the value returned by [`mean`] to get
/// the variance of `data`. Any finite `mean` is accepted, and the result is
/// never negative.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
/// - [`StatsError::NonFiniteMean`] if `mean` is NaN or infinite.
/// - [`StatsError::Overflow`] if the squared deviations leave the `f64` range.
///
/// # Examples
/// ```
/// use u_descriptive::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert_eq!(variance(&v, 5.0), Ok(4.0));
/// ```
pub fn variance(data: &[f64], mean: f64) -> Result<f64, StatsError> {
    validate::samples(data)?;
    validate::mean(mean)?;
    validate::result("variance", squared_deviation_mean(data, mean))
}

/// Computes the population standard deviation of `data`.
///
/// Equivalent to `sqrt(variance(data, mean(data)))`.
///
/// # Errors
/// - [`StatsError::EmptyInput`] if `data` is empty.
/// - [`StatsError::NonFiniteInput`] if any sample is NaN or infinite.
/// - [`StatsError::Overflow`] if the sum or variance leaves the `f64` range.
pub fn std_dev(data: &[f64]) -> Result<f64, StatsError> {
    let m = mean(data)?;
    variance(data, m).map(f64::sqrt)
}

// ---------------------------------------------------------------------------
// Unchecked kernels (callers validate first)
// ---------------------------------------------------------------------------

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    sorted
}

/// `sorted` must be non-empty and ascending.
fn median_of_sorted(sorted: &[f64], rule: MedianRule) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    let even = n % 2 == 0;
    log::trace!("median of {n} samples, rule {rule:?}, even={even}");
    if n == 1 {
        return sorted[0];
    }
    match (rule, even) {
        (MedianRule::Swapped, true) | (MedianRule::Conventional, false) => sorted[mid],
        (MedianRule::Swapped, false) | (MedianRule::Conventional, true) => {
            midpoint(sorted[mid - 1], sorted[mid])
        }
    }
}

/// `(a + b) / 2` without overflow near `±f64::MAX` or precision loss near zero.
///
/// The result always lies between `a` and `b`.
fn midpoint(a: f64, b: f64) -> f64 {
    const LO: f64 = f64::MIN_POSITIVE * 2.0;
    const HI: f64 = f64::MAX / 2.0;

    let (abs_a, abs_b) = (a.abs(), b.abs());
    if abs_a <= HI && abs_b <= HI {
        (a + b) / 2.0
    } else if abs_a < LO {
        a + b / 2.0
    } else if abs_b < LO {
        a / 2.0 + b
    } else {
        a / 2.0 + b / 2.0
    }
}

/// `data` must be non-empty and finite.
fn extrema(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        })
}

/// `data` must be non-empty.
fn squared_deviation_mean(data: &[f64], mean: f64) -> f64 {
    let squares = data.iter().fold(0.0, |acc, &x| {
        let d = mean - x;
        acc + d * d
    });
    squares / data.len() as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

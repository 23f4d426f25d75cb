//! Boundary checks shared by the public statistics operations.

use crate::error::StatsError;

/// Rejects empty slices and slices containing NaN or ±∞.
///
/// Reports the first non-finite sample by position.
pub(crate) fn samples(data: &[f64]) -> Result<(), StatsError> {
    if data.is_empty() {
        log::debug!("rejecting empty sample slice");
        return Err(StatsError::EmptyInput);
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, x)| !x.is_finite()) {
        log::debug!("rejecting non-finite sample {value} at index {index} of {}", data.len());
        return Err(StatsError::NonFiniteInput { index, value });
    }
    Ok(())
}

/// Rejects a NaN or infinite caller-supplied mean.
pub(crate) fn mean(mean: f64) -> Result<(), StatsError> {
    if mean.is_finite() {
        Ok(())
    } else {
        log::debug!("rejecting non-finite mean {mean}");
        Err(StatsError::NonFiniteMean(mean))
    }
}

/// Rejects a NaN or infinite value computed from finite samples.
pub(crate) fn result(statistic: &'static str, value: f64) -> Result<f64, StatsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("{statistic} overflowed to {value}");
        Err(StatsError::Overflow { statistic })
    }
}

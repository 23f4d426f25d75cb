//! # u-descriptive
//!
//! Descriptive statistics over a finite, in-memory slice of `f64` samples.
//!
//! The crate computes sum, mean, median, min, max, population variance,
//! standard deviation and sample count, either one at a time or together as
//! a [`StatisticsRecord`].
//!
//! ## Modules
//!
//! - [`stats`] — The statistics operations and the aggregate record
//! - [`error`] — [`StatsError`], returned on empty or non-finite input
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: inputs are borrowed immutably; the median sorts a copy
//! - **Fail fast**: empty input and NaN/±∞ samples are rejected with an
//!   explicit error instead of propagating NaN or ±∞
//! - **Property-based testing**: invariants verified via proptest
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`StatisticsRecord`] and
//!   [`MedianRule`](stats::MedianRule), using camelCase field names
//!
//! ## Example
//!
//! ```
//! use u_descriptive::{compute_statistics, StatsError};
//!
//! let s = compute_statistics(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0])?;
//! assert_eq!(s.count, 9);
//! assert_eq!(s.sum, 39.0);
//! assert!((s.standard_deviation - 1.632993161855452).abs() < 1e-15);
//!
//! assert_eq!(compute_statistics(&[]), Err(StatsError::EmptyInput));
//! # Ok::<(), StatsError>(())
//! ```

pub mod error;
pub mod stats;
mod validate;

pub use error::StatsError;
pub use stats::{compute_statistics, StatisticsEngine, StatisticsRecord};

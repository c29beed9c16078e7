//! Trend Analyzer: pure functions over a loaded series.
//!
//! Nothing here holds state: every function takes a series (or a window of
//! one) and returns a fresh value. Recoverable conditions are values, not
//! errors: a zero-price denominator sets `division_undefined`, a short window
//! yields `TrendOutcome::Insufficient`.

pub mod delta;
pub mod signal;
pub mod stats;
pub mod trend;

pub use delta::{daily_deltas, single_step_delta, week_over_week, StepDelta, WEEK};
pub use signal::{classify, Signal, SignalThresholds};
pub use stats::{statistics, PricePoint, SeriesStatistics};
pub use trend::{window_trend, window_trend_with, TrendOutcome, TrendResult};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no successor for record {index} in a series of {len}")]
    StepOutOfRange { index: usize, len: usize },

    #[error("index {index} out of range for a series of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot compute statistics of an empty series")]
    EmptySeries,
}

/// Percent change from `from` to `to`, or `None` when `from` is zero.
pub(crate) fn percent_change(from: f64, to: f64) -> Option<f64> {
    if from == 0.0 {
        None
    } else {
        Some((to - from) / from * 100.0)
    }
}

/// Series of consecutive days from 2025-05-18 with the given prices.
#[cfg(test)]
pub(crate) fn make_series(prices: &[f64]) -> crate::domain::ForecastSeries {
    use crate::domain::{ForecastRecord, ForecastSeries};
    let base = chrono::NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
    ForecastSeries::from_records(
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| ForecastRecord::new(base + chrono::Duration::days(i as i64), p))
            .collect(),
    )
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-9;

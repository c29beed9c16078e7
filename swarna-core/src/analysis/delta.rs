//! Price deltas between two records.
//!
//! percent = (to - from) / from * 100
//!
//! A zero `from` price makes the percent undefined. That is reported as
//! `percent = 0.0` with `division_undefined = true` and never as an error.

use chrono::NaiveDate;
use serde::Serialize;

use super::signal::SignalThresholds;
use super::trend::{TrendOutcome, TrendResult};
use super::{percent_change, AnalysisError};
use crate::domain::{ForecastRecord, ForecastSeries};

/// Records back from the reference point for a week-over-week delta.
pub const WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StepDelta {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub absolute: f64,
    pub percent: f64,
    pub division_undefined: bool,
}

impl StepDelta {
    pub fn between(from: &ForecastRecord, to: &ForecastRecord) -> Self {
        let absolute = to.predicted_price - from.predicted_price;
        let (percent, division_undefined) =
            match percent_change(from.predicted_price, to.predicted_price) {
                Some(p) => (p, false),
                None => (0.0, true),
            };
        Self {
            from: from.date,
            to: to.date,
            absolute,
            percent,
            division_undefined,
        }
    }

    /// The percent change, or `None` when it is undefined.
    pub fn percent_checked(&self) -> Option<f64> {
        (!self.division_undefined).then_some(self.percent)
    }
}

/// Delta from `series[index]` to `series[index + 1]`.
pub fn single_step_delta(
    series: &ForecastSeries,
    index: usize,
) -> Result<StepDelta, AnalysisError> {
    let records = series.records();
    match (records.get(index), index.checked_add(1).and_then(|i| records.get(i))) {
        (Some(from), Some(to)) => Ok(StepDelta::between(from, to)),
        _ => Err(AnalysisError::StepOutOfRange {
            index,
            len: records.len(),
        }),
    }
}

/// Every adjacent day-over-day delta, in order. Empty for fewer than two records.
pub fn daily_deltas(series: &ForecastSeries) -> Vec<StepDelta> {
    series
        .records()
        .windows(2)
        .map(|w| StepDelta::between(&w[0], &w[1]))
        .collect()
}

/// Trend from the record `WEEK` positions before `index` up to `index`.
///
/// `Insufficient` when fewer than `WEEK` records precede `index`.
pub fn week_over_week(
    series: &ForecastSeries,
    index: usize,
    thresholds: &SignalThresholds,
) -> Result<TrendOutcome, AnalysisError> {
    let records = series.records();
    let Some(end) = records.get(index) else {
        return Err(AnalysisError::IndexOutOfRange {
            index,
            len: records.len(),
        });
    };
    if index < WEEK {
        return Ok(TrendOutcome::Insufficient {
            records: index + 1,
        });
    }
    let start = &records[index - WEEK];
    Ok(TrendOutcome::Trend(TrendResult::between(start, end, thresholds)))
}

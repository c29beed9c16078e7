//! Window trend: first-to-last delta over a forecast window, classified.

use serde::Serialize;

use super::delta::StepDelta;
use super::signal::{Signal, SignalThresholds};
use crate::domain::{ForecastRecord, ForecastSeries};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendResult {
    pub window_start: ForecastRecord,
    pub window_end: ForecastRecord,
    pub absolute_delta: f64,
    /// 0.0 when `division_undefined`.
    pub percent_delta: f64,
    pub division_undefined: bool,
    pub signal: Signal,
}

impl TrendResult {
    /// Trend from `start` to `end`. An undefined percent classifies as `Stable`.
    pub fn between(
        start: &ForecastRecord,
        end: &ForecastRecord,
        thresholds: &SignalThresholds,
    ) -> Self {
        let step = StepDelta::between(start, end);
        let signal = if step.division_undefined {
            Signal::Stable
        } else {
            thresholds.classify(step.percent)
        };
        Self {
            window_start: *start,
            window_end: *end,
            absolute_delta: step.absolute,
            percent_delta: step.percent,
            division_undefined: step.division_undefined,
            signal,
        }
    }

    /// Calendar days spanned by the window.
    pub fn span_days(&self) -> i64 {
        (self.window_end.date - self.window_start.date).num_days()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendOutcome {
    Trend(TrendResult),
    /// Fewer than two records; callers show a neutral message.
    Insufficient { records: usize },
}

impl TrendOutcome {
    pub fn trend(&self) -> Option<&TrendResult> {
        match self {
            TrendOutcome::Trend(t) => Some(t),
            TrendOutcome::Insufficient { .. } => None,
        }
    }

    pub fn is_insufficient(&self) -> bool {
        matches!(self, TrendOutcome::Insufficient { .. })
    }
}

/// Trend over the whole window with the default thresholds.
pub fn window_trend(window: &ForecastSeries) -> TrendOutcome {
    window_trend_with(window, &SignalThresholds::default())
}

pub fn window_trend_with(window: &ForecastSeries, thresholds: &SignalThresholds) -> TrendOutcome {
    match (window.first(), window.last()) {
        (Some(first), Some(last)) if window.len() >= 2 => {
            TrendOutcome::Trend(TrendResult::between(first, last, thresholds))
        }
        _ => TrendOutcome::Insufficient {
            records: window.len(),
        },
    }
}

//! Tabular panels: date-range filter, raw forecast tail, and trend-from-date.

use chrono::NaiveDate;
use serde::Serialize;
use swarna_core::analysis::{window_trend_with, StepDelta, TrendOutcome};
use swarna_core::{ForecastRecord, ForecastSeries, SignalThresholds};

use super::ViewError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub record: ForecastRecord,
    /// Against the preceding record of the full series, not just the view.
    pub day_over_day: Option<StepDelta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowsView {
    pub rows: Vec<Row>,
    pub trend: TrendOutcome,
}

impl RowsView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn build(
        full: &ForecastSeries,
        window: &ForecastSeries,
        thresholds: &SignalThresholds,
    ) -> Self {
        let start = window
            .first()
            .and_then(|first| full.position_of(first.date))
            .unwrap_or(0);
        let rows = window
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                let day_over_day = (start + offset)
                    .checked_sub(1)
                    .and_then(|prev| full.get(prev))
                    .map(|prev| StepDelta::between(prev, record));
                Row {
                    record: *record,
                    day_over_day,
                }
            })
            .collect();
        Self {
            rows,
            trend: window_trend_with(window, thresholds),
        }
    }
}

/// Rows dated within `start..=end`.
pub fn range_view(
    series: &ForecastSeries,
    start: NaiveDate,
    end: NaiveDate,
    thresholds: &SignalThresholds,
) -> RowsView {
    RowsView::build(series, &series.find_range(start, end), thresholds)
}

/// The last `n` rows.
pub fn table_view(series: &ForecastSeries, n: usize, thresholds: &SignalThresholds) -> RowsView {
    RowsView::build(series, &series.tail(n), thresholds)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrendView {
    Window {
        from: NaiveDate,
        records: usize,
        outcome: TrendOutcome,
    },
    /// No record on or after `from`.
    NoData {
        from: NaiveDate,
        first_date: NaiveDate,
        last_date: NaiveDate,
    },
}

/// Trend from the first record dated on or after `from` to the end of the series.
pub fn trend_from(
    series: &ForecastSeries,
    from: NaiveDate,
    thresholds: &SignalThresholds,
) -> Result<TrendView, ViewError> {
    let (first_date, last_date) = series.bounds()?;
    let window = series.find_from(from);
    if window.is_empty() {
        return Ok(TrendView::NoData {
            from,
            first_date,
            last_date,
        });
    }
    Ok(TrendView::Window {
        from,
        records: window.len(),
        outcome: window_trend_with(&window, thresholds),
    })
}

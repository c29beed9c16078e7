//! Overview panel: headline price, lookback change, investment tip, statistics.

use chrono::NaiveDate;
use serde::Serialize;
use swarna_core::analysis::{
    statistics, week_over_week, window_trend_with, SeriesStatistics, TrendOutcome,
};
use swarna_core::{ForecastRecord, LoadReport, LookupError, SignalThresholds};

use super::ViewError;
use crate::config::OverviewConfig;

/// Binary recommendation from the lookback change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentTip {
    ConsiderInvesting,
    BetterToWait,
}

impl InvestmentTip {
    /// `ConsiderInvesting` only when the change strictly exceeds the threshold.
    pub fn from_change(outcome: &TrendOutcome, threshold_pct: f64) -> Option<Self> {
        let trend = outcome.trend()?;
        if !trend.division_undefined && trend.percent_delta > threshold_pct {
            Some(InvestmentTip::ConsiderInvesting)
        } else {
            Some(InvestmentTip::BetterToWait)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestmentTip::ConsiderInvesting => "Consider investing now",
            InvestmentTip::BetterToWait => "Better to wait",
        }
    }
}

/// Where the numbers came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    pub source: String,
    pub records: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub rows_read: usize,
    pub discarded_dates: usize,
    pub discarded_prices: usize,
    pub duplicate_dates: usize,
    pub dataset_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub latest: ForecastRecord,
    /// Trend over the last `lookback_rows` records.
    pub lookback: TrendOutcome,
    pub lookback_rows: usize,
    /// `None` when the lookback window is too short to have a change.
    pub tip: Option<InvestmentTip>,
    /// Latest record against the one a week before it.
    pub week_over_week: TrendOutcome,
    /// Trend across the entire series.
    pub full_trend: TrendOutcome,
    pub statistics: SeriesStatistics,
    pub diagnostics: Diagnostics,
}

pub fn overview(
    report: &LoadReport,
    settings: &OverviewConfig,
    thresholds: &SignalThresholds,
) -> Result<Overview, ViewError> {
    let series = &report.series;
    let latest = *series.last().ok_or(LookupError::EmptySeries)?;
    let (first_date, last_date) = series.bounds()?;

    let lookback = window_trend_with(&series.tail(settings.lookback_rows), thresholds);
    let tip = InvestmentTip::from_change(&lookback, settings.tip_threshold_pct);
    let week_over_week = week_over_week(series, series.len() - 1, thresholds)?;

    Ok(Overview {
        latest,
        lookback,
        lookback_rows: settings.lookback_rows,
        tip,
        week_over_week,
        full_trend: window_trend_with(series, thresholds),
        statistics: statistics(series)?,
        diagnostics: Diagnostics {
            source: report.source.clone(),
            records: series.len(),
            first_date,
            last_date,
            rows_read: report.rows_read,
            discarded_dates: report.discarded_dates,
            discarded_prices: report.discarded_prices,
            duplicate_dates: report.duplicate_dates,
            dataset_hash: report.dataset_hash.clone(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::make_series;
    use std::sync::Arc;
    use swarna_core::{ForecastSeries, Signal};

    fn report(series: ForecastSeries) -> LoadReport {
        LoadReport {
            rows_read: series.len(),
            series: Arc::new(series),
            source: "test".into(),
            discarded_dates: 1,
            discarded_prices: 0,
            duplicate_dates: 0,
            dataset_hash: "abc".into(),
        }
    }

    fn settings(lookback_rows: usize) -> OverviewConfig {
        OverviewConfig {
            lookback_rows,
            ..OverviewConfig::default()
        }
    }

    #[test]
    fn lookback_starts_lookback_rows_from_the_end() {
        // 10 rows, lookback 4 → reference is row 6 (price 106).
        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let view = overview(
            &report(make_series(&prices)),
            &settings(4),
            &SignalThresholds::default(),
        )
        .unwrap();

        let trend = view.lookback.trend().unwrap();
        assert_eq!(trend.window_start.predicted_price, 106.0);
        assert_eq!(trend.window_end.predicted_price, 109.0);
        assert_eq!(view.latest.predicted_price, 109.0);
    }

    #[test]
    fn lookback_longer_than_series_uses_first_record() {
        let view = overview(
            &report(make_series(&[100.0, 103.0])),
            &settings(60),
            &SignalThresholds::default(),
        )
        .unwrap();
        assert_eq!(
            view.lookback.trend().unwrap().window_start.predicted_price,
            100.0
        );
        assert_eq!(view.tip, Some(InvestmentTip::ConsiderInvesting));
        assert_eq!(view.full_trend.trend().unwrap().signal, Signal::Bullish);
    }

    #[test]
    fn tip_threshold_is_strict() {
        let view = overview(
            &report(make_series(&[100.0, 102.0])),
            &settings(60),
            &SignalThresholds::default(),
        )
        .unwrap();
        assert_eq!(view.tip, Some(InvestmentTip::BetterToWait));
    }

    #[test]
    fn single_record_has_no_tip() {
        let view = overview(
            &report(make_series(&[100.0])),
            &settings(60),
            &SignalThresholds::default(),
        )
        .unwrap();
        assert!(view.lookback.is_insufficient());
        assert!(view.week_over_week.is_insufficient());
        assert_eq!(view.tip, None);
        assert_eq!(view.statistics.count, 1);
    }

    #[test]
    fn diagnostics_mirror_the_report() {
        let view = overview(
            &report(make_series(&[100.0, 101.0, 99.0])),
            &settings(60),
            &SignalThresholds::default(),
        )
        .unwrap();
        assert_eq!(view.diagnostics.records, 3);
        assert_eq!(view.diagnostics.discarded_dates, 1);
        assert_eq!(view.diagnostics.last_date.to_string(), "2025-05-20");
        assert_eq!(view.diagnostics.dataset_hash, "abc");
    }

    #[test]
    fn empty_series_is_an_error() {
        let err = overview(
            &report(ForecastSeries::default()),
            &settings(60),
            &SignalThresholds::default(),
        )
        .unwrap_err();
        assert_eq!(err, ViewError::Lookup(LookupError::EmptySeries));
    }
}

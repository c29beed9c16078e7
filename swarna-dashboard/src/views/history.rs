//! Historical price panels: observed India and LBMA prices.
//!
//! History is supplementary. A file that cannot be loaded becomes an
//! `Unavailable` panel and never blocks the forecast panels.

use chrono::NaiveDate;
use serde::Serialize;
use swarna_core::analysis::{statistics, window_trend_with, PricePoint, SeriesStatistics};
use swarna_core::{LoadReport, SignalThresholds, TrendOutcome};

use super::ViewError;

/// Which observed market a panel covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    India,
    Global,
}

impl Market {
    pub fn title(self) -> &'static str {
        match self {
            Market::India => "Historical gold price in India (INR per 10g)",
            Market::Global => "Historical global gold price (LBMA, USD)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPanel {
    pub market: Market,
    pub source: String,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub statistics: SeriesStatistics,
    /// Oldest to newest observation.
    pub trend: TrendOutcome,
    /// The most recent observations, oldest first.
    pub recent: Vec<PricePoint>,
    pub discarded: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum HistoryState {
    Loaded(HistoryPanel),
    Unavailable { market: Market, reason: String },
}

impl HistoryState {
    pub fn market(&self) -> Market {
        match self {
            HistoryState::Loaded(panel) => panel.market,
            HistoryState::Unavailable { market, .. } => *market,
        }
    }

    pub fn panel(&self) -> Option<&HistoryPanel> {
        match self {
            HistoryState::Loaded(panel) => Some(panel),
            HistoryState::Unavailable { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub india: HistoryState,
    pub global: HistoryState,
}

pub fn history_panel(
    market: Market,
    report: &LoadReport,
    rows: usize,
    thresholds: &SignalThresholds,
) -> Result<HistoryPanel, ViewError> {
    let series = &report.series;
    let (first_date, last_date) = series.bounds()?;
    let recent = series
        .tail(rows)
        .iter()
        .map(|rec| PricePoint {
            date: rec.date,
            price: rec.predicted_price,
        })
        .collect();

    Ok(HistoryPanel {
        market,
        source: report.source.clone(),
        first_date,
        last_date,
        statistics: statistics(series)?,
        trend: window_trend_with(series, thresholds),
        recent,
        discarded: report.discarded(),
    })
}

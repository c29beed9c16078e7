//! View models: what each dashboard panel shows, computed from a loaded series.
//!
//! Views are pure: a series (or load report) plus config in, a serializable
//! value out. Missing data is a variant of the view, not an error, so the
//! presentation layer can render a neutral message.

pub mod date_report;
pub mod history;
pub mod overview;
pub mod rows;

pub use date_report::{date_report, DateReport, Outlook};
pub use history::{history_panel, HistoryPanel, HistoryState, HistoryView, Market};
pub use overview::{overview, Diagnostics, InvestmentTip, Overview};
pub use rows::{range_view, table_view, trend_from, Row, RowsView, TrendView};

use swarna_core::{AnalysisError, LookupError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

#[cfg(test)]
pub(crate) fn make_series(prices: &[f64]) -> swarna_core::ForecastSeries {
    use swarna_core::{ForecastRecord, ForecastSeries};
    let base = chrono::NaiveDate::from_ymd_opt(2025, 5, 18).unwrap();
    ForecastSeries::from_records(
        prices
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                ForecastRecord::new(base + chrono::Duration::days(i as i64), p)
                    .with_bounds(p - 10.0, p + 10.0)
            })
            .collect(),
    )
}

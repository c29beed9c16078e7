//! Dashboard session: the composition root's handle on data and config.
//!
//! A session owns the series cache and the configuration. Every panel call
//! goes through `load`, so the file is read once and then served from the
//! cache until `reload` invalidates it.

use std::path::Path;

use chrono::NaiveDate;
use swarna_core::store::{LoadError, LoadReport, SeriesCache};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::DashboardConfig;
use crate::views::{
    date_report, history_panel, overview, range_view, table_view, trend_from, DateReport,
    HistoryState, HistoryView, Market, Overview, RowsView, TrendView, ViewError,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    #[error("view error: {0}")]
    View(#[from] ViewError),
}

#[derive(Debug)]
pub struct Session {
    config: DashboardConfig,
    cache: SeriesCache,
}

impl Session {
    pub fn new(config: DashboardConfig, cache: SeriesCache) -> Self {
        Self { config, cache }
    }

    /// Session reading CSV files from disk.
    pub fn with_csv(config: DashboardConfig) -> Self {
        Self::new(config, SeriesCache::csv())
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn cache(&self) -> &SeriesCache {
        &self.cache
    }

    pub fn source_path(&self) -> &Path {
        &self.config.source.path
    }

    /// The current series, from the cache when possible.
    pub fn load(&mut self) -> Result<LoadReport, LoadError> {
        self.cache
            .get_or_load(&self.config.source.path, &self.config.schema)
    }

    /// Drop the cached series (forecast and history) and read the source again.
    pub fn reload(&mut self) -> Result<LoadReport, LoadError> {
        let removed = self.cache.invalidate(&self.config.source.path)
            + self.cache.invalidate(&self.config.history.path);
        info!(path = %self.config.source.path.display(), removed, "reloading forecast series");
        self.load()
    }

    pub fn overview(&mut self) -> Result<Overview, SessionError> {
        let report = self.load()?;
        Ok(overview(&report, &self.config.overview, &self.config.signal)?)
    }

    pub fn date_report(&mut self, date: NaiveDate) -> Result<DateReport, SessionError> {
        let report = self.load()?;
        Ok(date_report(&report.series, date)?)
    }

    pub fn trend_from(&mut self, from: NaiveDate) -> Result<TrendView, SessionError> {
        let report = self.load()?;
        Ok(trend_from(&report.series, from, &self.config.signal)?)
    }

    pub fn range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<RowsView, SessionError> {
        let report = self.load()?;
        Ok(range_view(&report.series, start, end, &self.config.signal))
    }

    /// The last `rows` records, or `overview.tail_rows` when `None`.
    pub fn table(&mut self, rows: Option<usize>) -> Result<RowsView, SessionError> {
        let report = self.load()?;
        let n = rows.unwrap_or(self.config.overview.tail_rows);
        Ok(table_view(&report.series, n, &self.config.signal))
    }

    /// Observed India and LBMA prices. Never fails: a market that cannot be
    /// loaded is reported as unavailable.
    pub fn history(&mut self, rows: Option<usize>) -> HistoryView {
        HistoryView {
            india: self.history_state(Market::India, rows),
            global: self.history_state(Market::Global, rows),
        }
    }

    fn history_state(&mut self, market: Market, rows: Option<usize>) -> HistoryState {
        let history = &self.config.history;
        let schema = match market {
            Market::India => history.india_schema(),
            Market::Global => history.global_schema(),
        };
        let rows = rows.unwrap_or(history.rows);

        let panel = self
            .cache
            .get_or_load(&history.path, &schema)
            .map_err(SessionError::from)
            .and_then(|report| Ok(history_panel(market, &report, rows, &self.config.signal)?));

        match panel {
            Ok(panel) => HistoryState::Loaded(panel),
            Err(e) => {
                warn!(
                    ?market,
                    path = %history.path.display(),
                    error = %e,
                    "historical prices unavailable"
                );
                HistoryState::Unavailable {
                    market,
                    reason: e.to_string(),
                }
            }
        }
    }
}

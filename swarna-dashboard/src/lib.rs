//! Swarna Drishti Dashboard: configuration, session, and view models.
//!
//! This crate builds on `swarna-core` to provide:
//! - TOML dashboard configuration with validated defaults
//! - A session owning the series cache, with explicit reload
//! - Panel view models: overview, price-for-date, date range, raw table,
//!   trend from a date, observed India and LBMA price history

pub mod config;
pub mod session;
pub mod views;

pub use config::{ConfigError, DashboardConfig, HistoryConfig, OverviewConfig, SourceConfig};
pub use session::{Session, SessionError};
pub use views::{
    DateReport, Diagnostics, HistoryPanel, HistoryState, HistoryView, InvestmentTip, Market,
    Outlook, Overview, Row, RowsView, TrendView, ViewError,
};

//! Swarna Drishti Core: forecast store and trend analyzer.
//!
//! This crate contains the decision logic behind the gold-price dashboard:
//! - Domain types (forecast records, the ordered forecast series)
//! - Schema configuration mapping logical fields onto CSV columns
//! - Forecast Store: CSV loading with discard accounting, date lookups
//! - Explicit per-session series cache with invalidation
//! - Trend Analyzer: step/window deltas, signal classification, statistics

pub mod analysis;
pub mod domain;
pub mod schema;
pub mod store;

pub use analysis::{
    classify, statistics, window_trend, AnalysisError, Signal, SignalThresholds, TrendOutcome,
    TrendResult,
};
pub use domain::{ForecastRecord, ForecastSeries};
pub use schema::SchemaConfig;
pub use store::{LoadError, LoadReport, LookupError, SeriesCache};

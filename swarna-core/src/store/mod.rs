//! Forecast Store: loading, lookup and per-session caching of forecast series.

pub mod cache;
pub mod error;
pub mod ingest;
pub mod lookup;
pub mod source;

pub use cache::SeriesCache;
pub use error::{LoadError, LookupError};
pub use ingest::{load_csv, load_reader, LoadReport};
pub use source::{CsvFileSource, ForecastSource};

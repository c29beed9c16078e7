//! Forecast source trait.
//!
//! The `ForecastSource` trait abstracts over where a series comes from so the
//! cache can be exercised with counting fakes. The cache layer sits above
//! this trait; sources know nothing about caching.

use std::path::Path;
use std::sync::Arc;

use super::error::LoadError;
use super::ingest::{load_csv, LoadReport};
use crate::schema::SchemaConfig;

pub trait ForecastSource: Send + Sync {
    /// Human-readable name of this source.
    fn name(&self) -> &str;

    /// Read and normalize the series stored at `path`.
    fn read(&self, path: &Path, schema: &SchemaConfig) -> Result<LoadReport, LoadError>;
}

impl<T: ForecastSource + ?Sized> ForecastSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn read(&self, path: &Path, schema: &SchemaConfig) -> Result<LoadReport, LoadError> {
        (**self).read(path, schema)
    }
}

/// Delimited text files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvFileSource;

impl ForecastSource for CsvFileSource {
    fn name(&self) -> &str {
        "csv-file"
    }

    fn read(&self, path: &Path, schema: &SchemaConfig) -> Result<LoadReport, LoadError> {
        load_csv(path, schema)
    }
}

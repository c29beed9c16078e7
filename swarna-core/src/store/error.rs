//! Structured error types for the Forecast Store.
//!
//! `LoadError` is fatal to a session: callers stop rendering. `LookupError`
//! is recoverable and maps to a neutral "no data" message.

use chrono::NaiveDate;
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read forecast source '{source_name}': {source}")]
    Unreadable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in '{source_name}': {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("forecast source '{source_name}' has no '{column}' column")]
    MissingColumn { source_name: String, column: String },

    #[error(
        "forecast source '{source_name}' produced no valid rows \
         ({rows_read} read, {discarded} discarded)"
    )]
    NoValidRows {
        source_name: String,
        rows_read: usize,
        discarded: usize,
    },

    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no forecast for {date}")]
    NotFound { date: NaiveDate },

    #[error("forecast series is empty")]
    EmptySeries,
}

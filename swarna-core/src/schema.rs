//! Physical layout of a forecast export.
//!
//! The upstream data-preparation step owns column names and the date format.
//! `SchemaConfig` maps the logical fields onto whatever that step emits, so a
//! renamed column is a config edit and never a code change.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Day-month-year, the format the forecast export writes.
pub const DEFAULT_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("column name for '{field}' must not be empty")]
    EmptyColumn { field: &'static str },

    #[error("invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),
}

/// Column mapping and date format for one CSV layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    pub date_column: String,
    pub price_column: String,
    /// Optional: rows simply carry no lower bound when unset or missing.
    pub lower_column: Option<String>,
    pub upper_column: Option<String>,
    /// chrono strftime pattern.
    pub date_format: String,
    pub delimiter: char,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            date_column: "Date".into(),
            price_column: "Predicted_Price".into(),
            lower_column: Some("yhat_lower".into()),
            upper_column: Some("yhat_upper".into()),
            date_format: DEFAULT_DATE_FORMAT.into(),
            delimiter: ',',
        }
    }
}

impl SchemaConfig {
    /// Layout of a raw Prophet export (`ds`, `yhat`, ISO dates).
    pub fn prophet() -> Self {
        Self {
            date_column: "ds".into(),
            price_column: "yhat".into(),
            lower_column: Some("yhat_lower".into()),
            upper_column: Some("yhat_upper".into()),
            date_format: "%Y-%m-%d".into(),
            delimiter: ',',
        }
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.date_column.trim().is_empty() {
            return Err(SchemaError::EmptyColumn { field: "date" });
        }
        if self.price_column.trim().is_empty() {
            return Err(SchemaError::EmptyColumn { field: "price" });
        }
        if matches!(&self.lower_column, Some(c) if c.trim().is_empty()) {
            return Err(SchemaError::EmptyColumn { field: "lower" });
        }
        if matches!(&self.upper_column, Some(c) if c.trim().is_empty()) {
            return Err(SchemaError::EmptyColumn { field: "upper" });
        }
        if self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error))
        {
            return Err(SchemaError::InvalidDateFormat(self.date_format.clone()));
        }
        if !self.delimiter.is_ascii() {
            return Err(SchemaError::InvalidDelimiter(self.delimiter));
        }
        Ok(())
    }

    /// The delimiter as the byte the CSV reader expects. Call after `validate`.
    pub(crate) fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b','
        }
    }
}

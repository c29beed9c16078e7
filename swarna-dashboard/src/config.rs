//! Serializable dashboard configuration.
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) yields a working configuration pointed at `forecast.csv`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use swarna_core::schema::SchemaError;
use swarna_core::{SchemaConfig, SignalThresholds};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration for one dashboard session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SourceConfig,
    pub schema: SchemaConfig,
    pub signal: SignalThresholds,
    pub overview: OverviewConfig,
    pub history: HistoryConfig,
}

/// Where the forecast export lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("forecast.csv"),
        }
    }
}

/// Overview panel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverviewConfig {
    /// Rows back from the latest forecast for the headline change (60 = two months).
    pub lookback_rows: usize,
    /// Headline change above this percent turns the tip to "consider investing".
    pub tip_threshold_pct: f64,
    /// Rows shown by the raw forecast table.
    pub tail_rows: usize,
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            lookback_rows: 60,
            tip_threshold_pct: 2.0,
            tail_rows: 60,
        }
    }
}

/// Observed price history shown beside the forecast.
///
/// One file carries both markets; each market is its own price column,
/// loaded as a separate series through the same cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub date_column: String,
    /// India price per 10 grams, in INR.
    pub india_column: String,
    /// LBMA global price, in USD.
    pub global_column: String,
    /// Day-first by default.
    pub date_format: String,
    pub delimiter: char,
    /// Most recent rows listed per market.
    pub rows: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("gold this final.csv"),
            date_column: "Date".into(),
            india_column: "Price 10g (in INR)".into(),
            global_column: "GGP (LBMA)".into(),
            date_format: "%d-%m-%Y".into(),
            delimiter: ',',
            rows: 30,
        }
    }
}

impl HistoryConfig {
    fn schema_for(&self, price_column: &str) -> SchemaConfig {
        SchemaConfig {
            date_column: self.date_column.clone(),
            price_column: price_column.to_string(),
            lower_column: None,
            upper_column: None,
            date_format: self.date_format.clone(),
            delimiter: self.delimiter,
        }
    }

    pub fn india_schema(&self) -> SchemaConfig {
        self.schema_for(&self.india_column)
    }

    pub fn global_schema(&self) -> SchemaConfig {
        self.schema_for(&self.global_column)
    }
}

impl DashboardConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.schema.validate()?;
        if !self.signal.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "signal thresholds need 0 <= mild_pct < strong_pct (got mild {}, strong {})",
                self.signal.mild_pct, self.signal.strong_pct
            )));
        }
        if self.overview.lookback_rows == 0 {
            return Err(ConfigError::Invalid("overview.lookback_rows must be >= 1".into()));
        }
        if !self.overview.tip_threshold_pct.is_finite() {
            return Err(ConfigError::Invalid(
                "overview.tip_threshold_pct must be finite".into(),
            ));
        }
        if self.source.path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("source.path must not be empty".into()));
        }
        self.history.india_schema().validate()?;
        self.history.global_schema().validate()?;
        Ok(())
    }
}

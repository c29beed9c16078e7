//! CSV ingestion: raw rows in, normalized `ForecastSeries` out.
//!
//! Row policy:
//! - cells are decoded as UTF-8 per row; an undecodable cell counts as unparseable
//! - unparseable date → discarded, counted in `discarded_dates`
//! - unparseable or non-finite price → discarded, counted in `discarded_prices`
//! - date already seen → discarded (first row wins), counted in `duplicate_dates`
//! - empty or unparseable bound cell → bound absent, row kept
//!
//! Zero surviving rows is a hard `LoadError::NoValidRows`.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::error::LoadError;
use crate::domain::{ForecastRecord, ForecastSeries};
use crate::schema::SchemaConfig;

/// A loaded series plus the diagnostics of how it was built.
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    pub series: Arc<ForecastSeries>,
    /// Label of the source the rows came from (path for files).
    pub source: String,
    /// Data rows seen, header excluded.
    pub rows_read: usize,
    pub discarded_dates: usize,
    pub discarded_prices: usize,
    pub duplicate_dates: usize,
    /// BLAKE3 over every kept record, for diagnostics and change detection.
    pub dataset_hash: String,
}

impl LoadReport {
    pub fn discarded(&self) -> usize {
        self.discarded_dates + self.discarded_prices + self.duplicate_dates
    }
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    date: usize,
    price: usize,
    lower: Option<usize>,
    upper: Option<usize>,
}

impl ColumnIndex {
    fn resolve(
        headers: &StringRecord,
        schema: &SchemaConfig,
        source_name: &str,
    ) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let required = |name: &str| {
            find(name).ok_or_else(|| LoadError::MissingColumn {
                source_name: source_name.to_string(),
                column: name.to_string(),
            })
        };
        let optional = |name: Option<&String>| {
            let name = name?;
            let idx = find(name);
            if idx.is_none() {
                debug!(source = source_name, column = %name, "bound column absent");
            }
            idx
        };

        Ok(Self {
            date: required(&schema.date_column)?,
            price: required(&schema.price_column)?,
            lower: optional(schema.lower_column.as_ref()),
            upper: optional(schema.upper_column.as_ref()),
        })
    }
}

/// Load a forecast series from a CSV file on disk.
pub fn load_csv(path: &Path, schema: &SchemaConfig) -> Result<LoadReport, LoadError> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|source| LoadError::Unreadable {
        source_name: source_name.clone(),
        source,
    })?;
    load_reader(file, &source_name, schema)
}

/// Load a forecast series from any reader producing delimited text.
pub fn load_reader<R: Read>(
    reader: R,
    source_name: &str,
    schema: &SchemaConfig,
) -> Result<LoadReport, LoadError> {
    schema.validate()?;
    let started = Instant::now();

    let csv_err = |source| LoadError::Csv {
        source_name: source_name.to_string(),
        source,
    };

    let mut rdr = ReaderBuilder::new()
        .delimiter(schema.delimiter_byte())
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let columns = ColumnIndex::resolve(&headers, schema, source_name)?;

    let mut records = Vec::new();
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    let mut rows_read = 0usize;
    let mut discarded_dates = 0usize;
    let mut discarded_prices = 0usize;
    let mut duplicate_dates = 0usize;

    for row in rdr.byte_records() {
        let row = row.map_err(csv_err)?;
        rows_read += 1;

        let Some(date) = parse_date(cell(&row, columns.date), &schema.date_format) else {
            discarded_dates += 1;
            continue;
        };
        let Some(predicted_price) = parse_price(cell(&row, columns.price)) else {
            discarded_prices += 1;
            continue;
        };
        if !seen.insert(date) {
            duplicate_dates += 1;
            continue;
        }

        records.push(ForecastRecord {
            date,
            predicted_price,
            lower_bound: columns.lower.and_then(|i| parse_price(cell(&row, i))),
            upper_bound: columns.upper.and_then(|i| parse_price(cell(&row, i))),
        });
    }

    let discarded = discarded_dates + discarded_prices + duplicate_dates;
    if records.is_empty() {
        return Err(LoadError::NoValidRows {
            source_name: source_name.to_string(),
            rows_read,
            discarded,
        });
    }
    if discarded > 0 {
        warn!(
            source = source_name,
            discarded_dates, discarded_prices, duplicate_dates, "discarded forecast rows"
        );
    }

    let series = ForecastSeries::from_records(records);
    let dataset_hash = compute_dataset_hash(&series);

    info!(
        source = source_name,
        records = series.len(),
        rows_read,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "loaded forecast series"
    );

    Ok(LoadReport {
        series: Arc::new(series),
        source: source_name.to_string(),
        rows_read,
        discarded_dates,
        discarded_prices,
        duplicate_dates,
        dataset_hash,
    })
}

/// A cell as text; `None` when absent or not valid UTF-8.
fn cell(row: &ByteRecord, index: usize) -> Option<&str> {
    std::str::from_utf8(row.get(index)?).ok()
}

fn parse_date(cell: Option<&str>, format: &str) -> Option<NaiveDate> {
    let cell = cell?;
    NaiveDate::parse_from_str(cell, format).ok()
}

fn parse_price(cell: Option<&str>) -> Option<f64> {
    let value: f64 = cell?.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Deterministic BLAKE3 hash over all kept records in date order.
fn compute_dataset_hash(series: &ForecastSeries) -> String {
    let mut hasher = blake3::Hasher::new();
    for rec in series {
        hasher.update(rec.date.to_string().as_bytes());
        hasher.update(&rec.predicted_price.to_le_bytes());
        for bound in [rec.lower_bound, rec.upper_bound] {
            match bound {
                Some(v) => {
                    hasher.update(&[1]);
                    hasher.update(&v.to_le_bytes());
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }
    }
    hasher.finalize().to_hex().to_string()
}

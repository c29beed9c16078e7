//! Price-for-a-date panel.

use chrono::NaiveDate;
use serde::Serialize;
use swarna_core::analysis::StepDelta;
use swarna_core::{ForecastRecord, ForecastSeries, LookupError};

use super::ViewError;

/// The chosen date's price against the latest forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    Rise,
    Dip,
    Stable,
}

impl Outlook {
    pub fn compare(price: f64, latest: f64) -> Self {
        if price > latest {
            Outlook::Rise
        } else if price < latest {
            Outlook::Dip
        } else {
            Outlook::Stable
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outlook::Rise => "Prices expected to rise: consider investing",
            Outlook::Dip => "Prices expected to dip: better to wait",
            Outlook::Stable => "Price stable: invest as needed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DateReport {
    Found {
        record: ForecastRecord,
        confidence: Option<(f64, f64)>,
        latest: ForecastRecord,
        outlook: Outlook,
        /// Change from the previous forecast day, absent on the first record.
        day_over_day: Option<StepDelta>,
    },
    NotAvailable {
        date: NaiveDate,
        first_date: NaiveDate,
        last_date: NaiveDate,
    },
}

pub fn date_report(series: &ForecastSeries, date: NaiveDate) -> Result<DateReport, ViewError> {
    let (first_date, last_date) = series.bounds()?;
    let latest = *series.last().ok_or(LookupError::EmptySeries)?;

    let Some(index) = series.position_of(date) else {
        return Ok(DateReport::NotAvailable {
            date,
            first_date,
            last_date,
        });
    };
    let record = *series.find_exact(date)?;
    let day_over_day = index
        .checked_sub(1)
        .and_then(|prev| series.get(prev))
        .map(|prev| StepDelta::between(prev, &record));

    Ok(DateReport::Found {
        record,
        confidence: record.confidence_range(),
        latest,
        outlook: Outlook::compare(record.predicted_price, latest.predicted_price),
        day_over_day,
    })
}

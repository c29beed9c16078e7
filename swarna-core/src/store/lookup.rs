//! Date lookups over a loaded series.
//!
//! All lookups rely on the ascending-date invariant of `ForecastSeries`, so
//! they are binary searches plus a slice copy.

use chrono::NaiveDate;

use super::error::LookupError;
use crate::domain::{ForecastRecord, ForecastSeries};

impl ForecastSeries {
    /// The record dated exactly `date`.
    pub fn find_exact(&self, date: NaiveDate) -> Result<&ForecastRecord, LookupError> {
        self.records()
            .binary_search_by_key(&date, |r| r.date)
            .map(|idx| &self.records()[idx])
            .map_err(|_| LookupError::NotFound { date })
    }

    /// Every record dated on or after `date`, in order. Empty when none qualify.
    pub fn find_from(&self, date: NaiveDate) -> ForecastSeries {
        let start = self.records().partition_point(|r| r.date < date);
        ForecastSeries::from_sorted(self.records()[start..].to_vec())
    }

    /// Records with `start <= date <= end`. Empty when `start > end`.
    pub fn find_range(&self, start: NaiveDate, end: NaiveDate) -> ForecastSeries {
        if start > end {
            return ForecastSeries::default();
        }
        let records = self.records();
        let lo = records.partition_point(|r| r.date < start);
        let hi = records.partition_point(|r| r.date <= end);
        ForecastSeries::from_sorted(records[lo..hi].to_vec())
    }

    /// The last `n` records (all of them when `n >= len`).
    pub fn tail(&self, n: usize) -> ForecastSeries {
        let records = self.records();
        let start = records.len().saturating_sub(n);
        ForecastSeries::from_sorted(records[start..].to_vec())
    }

    /// Earliest and latest dates, used to constrain user input.
    pub fn bounds(&self) -> Result<(NaiveDate, NaiveDate), LookupError> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Ok((first.date, last.date)),
            _ => Err(LookupError::EmptySeries),
        }
    }

    /// Position of the record dated `date`, if present.
    pub fn position_of(&self, date: NaiveDate) -> Option<usize> {
        self.records().binary_search_by_key(&date, |r| r.date).ok()
    }
}

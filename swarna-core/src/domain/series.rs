//! ForecastSeries: the ordered, immutable forecast time series.
//!
//! Invariant: records are sorted strictly ascending by date, so every date
//! appears at most once. The only constructor enforces it; there is no way
//! to mutate a series in place. A reload builds a new series.

use chrono::NaiveDate;
use serde::Serialize;

use super::record::ForecastRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ForecastSeries {
    records: Vec<ForecastRecord>,
}

impl ForecastSeries {
    /// Build a series from records in any order.
    ///
    /// Sorting is stable, so when two records share a date the one that came
    /// first in `records` is kept.
    pub fn from_records(mut records: Vec<ForecastRecord>) -> Self {
        records.sort_by_key(|r| r.date);
        records.dedup_by_key(|r| r.date);
        Self { records }
    }

    /// Wrap records already known to be strictly ascending (sub-slices of a series).
    pub(crate) fn from_sorted(records: Vec<ForecastRecord>) -> Self {
        debug_assert!(records.windows(2).all(|w| w[0].date < w[1].date));
        Self { records }
    }

    pub fn records(&self) -> &[ForecastRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ForecastRecord> {
        self.records.get(index)
    }

    pub fn first(&self) -> Option<&ForecastRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&ForecastRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ForecastRecord> {
        self.records.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.iter().map(|r| r.date)
    }
}

impl<'a> IntoIterator for &'a ForecastSeries {
    type Item = &'a ForecastRecord;
    type IntoIter = std::slice::Iter<'a, ForecastRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

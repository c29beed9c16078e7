//! ForecastRecord: one forecast row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Predicted gold price for a single calendar day.
///
/// Prices are INR per 10 g. The bounds are the optional confidence band
/// exported alongside the prediction; either may be absent on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub predicted_price: f64,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

impl ForecastRecord {
    pub fn new(date: NaiveDate, predicted_price: f64) -> Self {
        Self {
            date,
            predicted_price,
            lower_bound: None,
            upper_bound: None,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower_bound = Some(lower);
        self.upper_bound = Some(upper);
        self
    }

    /// The `(lower, upper)` confidence range, only when both bounds are present.
    pub fn confidence_range(&self) -> Option<(f64, f64)> {
        match (self.lower_bound, self.upper_bound) {
            (Some(lower), Some(upper)) => Some((lower, upper)),
            _ => None,
        }
    }
}

//! Aggregate price statistics.

use chrono::NaiveDate;
use serde::Serialize;

use super::AnalysisError;
use crate::domain::ForecastSeries;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStatistics {
    pub count: usize,
    pub average: f64,
    pub max: PricePoint,
    pub min: PricePoint,
}

/// Average, maximum and minimum predicted price.
///
/// Ties for max or min resolve to the earliest date: the scan runs in
/// ascending date order and only replaces on a strict improvement.
pub fn statistics(series: &ForecastSeries) -> Result<SeriesStatistics, AnalysisError> {
    let first = series.first().ok_or(AnalysisError::EmptySeries)?;
    let start = PricePoint {
        date: first.date,
        price: first.predicted_price,
    };

    let (sum, max, min) = series.iter().skip(1).fold(
        (first.predicted_price, start, start),
        |(sum, max, min), rec| {
            let point = PricePoint {
                date: rec.date,
                price: rec.predicted_price,
            };
            (
                sum + rec.predicted_price,
                if point.price > max.price { point } else { max },
                if point.price < min.price { point } else { min },
            )
        },
    );

    Ok(SeriesStatistics {
        count: series.len(),
        average: sum / series.len() as f64,
        max,
        min,
    })
}

//! Domain types for Swarna Drishti

pub mod record;
pub mod series;

pub use record::ForecastRecord;
pub use series::ForecastSeries;

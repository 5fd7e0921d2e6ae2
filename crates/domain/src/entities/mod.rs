//! Domain entities

mod advisory;
mod air_quality;
mod report;
mod weather;

pub use advisory::{ADVISORY_UNAVAILABLE_PREFIX, AdvisoryText};
pub use air_quality::{AirQualityField, AirQualityReading};
pub use report::EnvironmentReport;
pub use weather::{WeatherField, WeatherReading};

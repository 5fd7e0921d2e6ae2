//! Analysis report

use serde::{Deserialize, Serialize};

use super::{AdvisoryText, AirQualityReading, WeatherReading};

/// Everything the analysis endpoint returns for one coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentReport {
    /// Air-quality provider `current` block
    pub aqi_data: AirQualityReading,
    /// Weather provider `current` block, empty when the weather fetch failed
    pub weather_data: WeatherReading,
    /// Generated advisory or the fallback message
    pub analysis: AdvisoryText,
}

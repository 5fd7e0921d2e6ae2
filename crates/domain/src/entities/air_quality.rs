//! Air-quality reading

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Variables requested from the air-quality provider's `current` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirQualityField {
    /// United States Air Quality Index
    UsAqi,
    /// Particulate matter up to 10 µm
    Pm10,
    /// Particulate matter up to 2.5 µm
    Pm25,
    /// Carbon monoxide
    CarbonMonoxide,
    /// Nitrogen dioxide
    NitrogenDioxide,
    /// Sulphur dioxide
    SulphurDioxide,
    /// Ozone
    Ozone,
}

impl AirQualityField {
    /// All fields, in the order they are requested from the provider
    pub const ALL: [Self; 7] = [
        Self::UsAqi,
        Self::Pm10,
        Self::Pm25,
        Self::CarbonMonoxide,
        Self::NitrogenDioxide,
        Self::SulphurDioxide,
        Self::Ozone,
    ];

    /// Provider variable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UsAqi => "us_aqi",
            Self::Pm10 => "pm10",
            Self::Pm25 => "pm2_5",
            Self::CarbonMonoxide => "carbon_monoxide",
            Self::NitrogenDioxide => "nitrogen_dioxide",
            Self::SulphurDioxide => "sulphur_dioxide",
            Self::Ozone => "ozone",
        }
    }

    /// Comma-separated variable list for the `current=` query parameter
    #[must_use]
    pub fn query_list() -> String {
        Self::ALL.map(|f| f.as_str()).join(",")
    }
}

impl fmt::Display for AirQualityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current air-quality conditions at a location
///
/// Holds the provider's `current` object exactly as received so it can be
/// handed back to API consumers unchanged. Named fields are read through typed
/// accessors; a field that is missing or not numeric reads as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirQualityReading {
    current: Map<String, Value>,
}

impl AirQualityReading {
    /// Wrap a provider `current` block
    #[must_use]
    pub const fn from_current(current: Map<String, Value>) -> Self {
        Self { current }
    }

    /// Reading with no values
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Numeric value of a named field
    #[must_use]
    pub fn get(&self, field: AirQualityField) -> Option<f64> {
        self.current.get(field.as_str()).and_then(Value::as_f64)
    }

    /// US AQI
    #[must_use]
    pub fn us_aqi(&self) -> Option<f64> {
        self.get(AirQualityField::UsAqi)
    }

    /// PM2.5 concentration (µg/m³)
    #[must_use]
    pub fn pm2_5(&self) -> Option<f64> {
        self.get(AirQualityField::Pm25)
    }

    /// PM10 concentration (µg/m³)
    #[must_use]
    pub fn pm10(&self) -> Option<f64> {
        self.get(AirQualityField::Pm10)
    }

    /// Raw provider block
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.current
    }

    /// Whether the provider returned nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

//! Weather reading

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Variables requested from the weather provider's `current` block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherField {
    /// Air temperature at 2 m (°C)
    Temperature,
    /// Relative humidity at 2 m (%)
    RelativeHumidity,
    /// Wind speed at 10 m (km/h)
    WindSpeed,
    /// WMO weather code
    WeatherCode,
}

impl WeatherField {
    /// All fields, in the order they are requested from the provider
    pub const ALL: [Self; 4] = [
        Self::Temperature,
        Self::RelativeHumidity,
        Self::WindSpeed,
        Self::WeatherCode,
    ];

    /// Provider variable name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature_2m",
            Self::RelativeHumidity => "relative_humidity_2m",
            Self::WindSpeed => "wind_speed_10m",
            Self::WeatherCode => "weather_code",
        }
    }

    /// Comma-separated variable list for the `current=` query parameter
    #[must_use]
    pub fn query_list() -> String {
        Self::ALL.map(|f| f.as_str()).join(",")
    }
}

impl fmt::Display for WeatherField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current weather conditions at a location
///
/// Same shape as [`crate::AirQualityReading`]: the provider block verbatim,
/// with typed accessors. An empty reading stands in for a failed fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherReading {
    current: Map<String, Value>,
}

impl WeatherReading {
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
    pub fn get(&self, field: WeatherField) -> Option<f64> {
        self.current.get(field.as_str()).and_then(Value::as_f64)
    }

    /// Temperature in °C
    #[must_use]
    pub fn temperature(&self) -> Option<f64> {
        self.get(WeatherField::Temperature)
    }

    /// Relative humidity in %
    #[must_use]
    pub fn humidity(&self) -> Option<f64> {
        self.get(WeatherField::RelativeHumidity)
    }

    /// Wind speed in km/h
    #[must_use]
    pub fn wind_speed(&self) -> Option<f64> {
        self.get(WeatherField::WindSpeed)
    }

    /// Raw provider block
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.current
    }

    /// Whether the reading carries no values
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

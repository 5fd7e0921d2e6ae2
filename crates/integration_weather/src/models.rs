//! Weather data models
//!
//! Types for representing responses from the Open-Meteo Forecast API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current conditions as returned by the provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Timezone resolved by the provider (`timezone=auto`)
    pub timezone: Option<String>,
    /// Elevation of the grid cell in meters
    pub elevation: Option<f64>,
    /// The `current` block, untouched; empty when the provider omitted it
    pub values: Map<String, Value>,
}

/// Raw API response from Open-Meteo
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub current: Option<Map<String, Value>>,
}

impl From<ApiResponse> for CurrentConditions {
    fn from(response: ApiResponse) -> Self {
        Self {
            timezone: response.timezone,
            elevation: response.elevation,
            values: response.current.unwrap_or_default(),
        }
    }
}

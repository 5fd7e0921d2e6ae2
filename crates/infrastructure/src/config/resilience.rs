//! Operational configuration: health checks and logging.

use application::{AIR_QUALITY_SERVICE, INFERENCE_SERVICE, WEATHER_SERVICE};
use serde::{Deserialize, Serialize};

// ==============================
// Telemetry Configuration
// ==============================

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryAppConfig {
    /// Filter directives used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "airwise_server=info,presentation_http=info,application=info,infrastructure=info,\
     ai_core=info,integration_air_quality=info,integration_weather=info,tower_http=info"
        .to_string()
}

impl Default for TelemetryAppConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

// ==============================
// Health Check Configuration
// ==============================

/// Health check configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthAppConfig {
    /// Global timeout for all health checks in seconds
    #[serde(default = "default_health_global_timeout")]
    pub global_timeout_secs: u64,

    /// Air-quality provider health check timeout in seconds (overrides global)
    pub air_quality_timeout_secs: Option<u64>,

    /// Weather provider health check timeout in seconds (overrides global)
    pub weather_timeout_secs: Option<u64>,

    /// Inference backend health check timeout in seconds (overrides global)
    pub inference_timeout_secs: Option<u64>,
}

const fn default_health_global_timeout() -> u64 {
    5
}

impl Default for HealthAppConfig {
    fn default() -> Self {
        Self {
            global_timeout_secs: default_health_global_timeout(),
            air_quality_timeout_secs: None,
            weather_timeout_secs: None,
            inference_timeout_secs: None,
        }
    }
}

impl HealthAppConfig {
    /// Convert to `application::HealthConfig`
    #[must_use]
    pub fn to_health_config(&self) -> application::HealthConfig {
        use std::collections::HashMap;

        let service_timeouts: HashMap<String, u64> = [
            (AIR_QUALITY_SERVICE, self.air_quality_timeout_secs),
            (WEATHER_SERVICE, self.weather_timeout_secs),
            (INFERENCE_SERVICE, self.inference_timeout_secs),
        ]
        .into_iter()
        .filter_map(|(name, secs)| secs.map(|s| (name.to_string(), s)))
        .collect();

        application::HealthConfig {
            global_timeout_secs: self.global_timeout_secs,
            service_timeouts,
        }
    }
}

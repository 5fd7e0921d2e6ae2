//! Health aggregation service
//!
//! Probes each external dependency with a configurable timeout and reports
//! per-service status plus overall readiness.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use crate::ports::{AirQualityPort, InferencePort, WeatherPort};

/// Default global timeout for health checks in seconds
const DEFAULT_HEALTH_CHECK_TIMEOUT_SECS: u64 = 5;

pub const AIR_QUALITY_SERVICE: &str = "air_quality";
pub const WEATHER_SERVICE: &str = "weather";
pub const INFERENCE_SERVICE: &str = "inference";

/// Configuration for health check behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthConfig {
    /// Global timeout for all health checks in seconds (default: 5)
    #[serde(default = "default_global_timeout")]
    pub global_timeout_secs: u64,

    /// Service-specific timeout overrides in seconds
    #[serde(default)]
    pub service_timeouts: HashMap<String, u64>,
}

const fn default_global_timeout() -> u64 {
    DEFAULT_HEALTH_CHECK_TIMEOUT_SECS
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            global_timeout_secs: default_global_timeout(),
            service_timeouts: HashMap::new(),
        }
    }
}

impl HealthConfig {
    /// Get the timeout for a specific service
    #[must_use]
    pub fn timeout_for_service(&self, service: &str) -> Duration {
        let secs = self
            .service_timeouts
            .get(service)
            .copied()
            .unwrap_or(self.global_timeout_secs);
        Duration::from_secs(secs)
    }
}

/// Status of an individual service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Whether the service is healthy
    pub healthy: bool,
    /// Optional additional information (e.g., model name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    /// Response time in milliseconds (if check completed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    /// Error message if unhealthy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServiceHealth {
    /// Create a healthy status
    #[must_use]
    pub const fn healthy() -> Self {
        Self {
            healthy: true,
            info: None,
            response_time_ms: None,
            error: None,
        }
    }

    /// Create an unhealthy status
    #[must_use]
    pub fn unhealthy(error: impl Into<String>) -> Self {
        Self {
            healthy: false,
            info: None,
            response_time_ms: None,
            error: Some(error.into()),
        }
    }

    /// Create an unhealthy status due to timeout
    #[must_use]
    pub fn timeout() -> Self {
        Self::unhealthy("Health check timed out")
    }

    /// Attach additional information
    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Add response time to the status
    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

/// Health report for all dependencies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// True when every required dependency is healthy
    pub ready: bool,
    /// Individual service statuses
    pub services: BTreeMap<String, ServiceHealth>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

impl HealthReport {
    /// Dependencies without which `/analyze` cannot succeed meaningfully
    pub const REQUIRED_SERVICES: [&'static str; 2] = [AIR_QUALITY_SERVICE, INFERENCE_SERVICE];

    /// Create a new health report
    #[must_use]
    pub fn new(services: BTreeMap<String, ServiceHealth>) -> Self {
        let ready = Self::REQUIRED_SERVICES
            .iter()
            .all(|name| services.get(*name).is_some_and(|s| s.healthy));

        Self {
            ready,
            services,
            checked_at: chrono::Utc::now(),
        }
    }

    /// Get status of a specific service
    #[must_use]
    pub fn service_status(&self, name: &str) -> Option<&ServiceHealth> {
        self.services.get(name)
    }
}

/// Service for aggregating health checks across all external services
pub struct HealthService {
    config: HealthConfig,
    air_quality: Arc<dyn AirQualityPort>,
    weather: Arc<dyn WeatherPort>,
    inference: Arc<dyn InferencePort>,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl HealthService {
    /// Create a new health service
    #[must_use]
    pub fn new(
        air_quality: Arc<dyn AirQualityPort>,
        weather: Arc<dyn WeatherPort>,
        inference: Arc<dyn InferencePort>,
    ) -> Self {
        Self {
            config: HealthConfig::default(),
            air_quality,
            weather,
            inference,
        }
    }

    /// Set the health check configuration
    #[must_use]
    pub fn with_config(mut self, config: HealthConfig) -> Self {
        self.config = config;
        self
    }

    /// Check health of all services concurrently
    #[instrument(skip(self))]
    pub async fn check_all(&self) -> HealthReport {
        let (air_quality, weather, inference) = tokio::join!(
            self.check_air_quality(),
            self.check_weather(),
            self.check_inference(),
        );

        let mut services = BTreeMap::new();
        services.insert(AIR_QUALITY_SERVICE.to_string(), air_quality);
        services.insert(WEATHER_SERVICE.to_string(), weather);
        services.insert(INFERENCE_SERVICE.to_string(), inference);

        HealthReport::new(services)
    }

    /// Check the air-quality provider
    pub async fn check_air_quality(&self) -> ServiceHealth {
        self.probe(AIR_QUALITY_SERVICE, self.air_quality.is_available())
            .await
    }

    /// Check the weather provider
    pub async fn check_weather(&self) -> ServiceHealth {
        self.probe(WEATHER_SERVICE, self.weather.is_available()).await
    }

    /// Check the inference backend
    pub async fn check_inference(&self) -> ServiceHealth {
        let status = self
            .probe(INFERENCE_SERVICE, self.inference.is_healthy())
            .await;
        if status.healthy {
            status.with_info(self.inference.current_model())
        } else {
            status
        }
    }

    async fn probe(&self, service: &str, check: impl Future<Output = bool>) -> ServiceHealth {
        let timeout_duration = self.config.timeout_for_service(service);
        let start = Instant::now();

        let Ok(healthy) = timeout(timeout_duration, check).await else {
            warn!(service, "Health check timed out");
            return ServiceHealth::timeout();
        };

        // Bounded by the health check timeout, far below u64::MAX milliseconds
        #[allow(clippy::cast_possible_truncation)]
        let response_time = start.elapsed().as_millis() as u64;

        if healthy {
            debug!(service, response_time_ms = response_time, "Service healthy");
            ServiceHealth::healthy().with_response_time(response_time)
        } else {
            warn!(service, response_time_ms = response_time, "Service unhealthy");
            ServiceHealth::unhealthy(format!("{service} service unavailable"))
                .with_response_time(response_time)
        }
    }
}

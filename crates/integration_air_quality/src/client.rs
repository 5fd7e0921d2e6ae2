//! Open-Meteo air-quality client

use std::time::Duration;

use async_trait::async_trait;
use domain::AirQualityField;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::CurrentAirQuality;

/// Air-quality client errors
#[derive(Debug, Error)]
pub enum AirQualityError {
    /// HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the air-quality service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0}s")]
    Timeout(u64),

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Air-quality service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQualityConfig {
    /// API base URL (default: <https://air-quality-api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://air-quality-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for AirQualityConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for fetching current air quality
#[async_trait]
pub trait AirQualityClient: Send + Sync {
    /// Get current air quality for a location
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentAirQuality, AirQualityError>;

    /// Check if the air-quality service is healthy
    async fn is_healthy(&self) -> bool;
}

/// Open-Meteo air-quality HTTP client
#[derive(Debug)]
pub struct OpenMeteoAirQualityClient {
    client: Client,
    config: AirQualityConfig,
}

impl OpenMeteoAirQualityClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: AirQualityConfig) -> Result<Self, AirQualityError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AirQualityError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn build_current_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}/air-quality?latitude={}&longitude={}&current={}&timezone=auto",
            self.config.base_url.trim_end_matches('/'),
            latitude,
            longitude,
            AirQualityField::query_list()
        )
    }
}

#[async_trait]
impl AirQualityClient for OpenMeteoAirQualityClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<CurrentAirQuality, AirQualityError> {
        let url = self.build_current_url(latitude, longitude);
        debug!(url = %url, "Fetching current air quality");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                AirQualityError::Timeout(self.config.timeout_secs)
            } else {
                AirQualityError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AirQualityError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(AirQualityError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(AirQualityError::RequestFailed(format!("HTTP {status}")));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AirQualityError::ParseError(e.to_string()))?;

        CurrentAirQuality::try_from(body).map_err(AirQualityError::ParseError)
    }

    async fn is_healthy(&self) -> bool {
        let location = domain::GeoLocation::berlin();
        self.get_current(location.latitude(), location.longitude())
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = AirQualityConfig::default();
        assert_eq!(config.base_url, "https://air-quality-api.open-meteo.com/v1");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn current_url_requests_all_pollutants() {
        let client =
            OpenMeteoAirQualityClient::new(AirQualityConfig::default()).expect("client");
        let url = client.build_current_url(28.61, 77.2);
        assert_eq!(
            url,
            "https://air-quality-api.open-meteo.com/v1/air-quality?latitude=28.61&longitude=77.2\
             &current=us_aqi,pm10,pm2_5,carbon_monoxide,nitrogen_dioxide,sulphur_dioxide,ozone\
             &timezone=auto"
        );
    }

    #[test]
    fn negative_coordinates_are_interpolated_as_is() {
        let client =
            OpenMeteoAirQualityClient::new(AirQualityConfig::default()).expect("client");
        let url = client.build_current_url(-33.87, -151.21);
        assert!(url.contains("latitude=-33.87&longitude=-151.21"));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AirQualityError::ServiceUnavailable("HTTP 503".into()).to_string(),
            "Service unavailable: HTTP 503"
        );
    }
}

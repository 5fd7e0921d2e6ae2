//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{GeoLocation, WeatherReading};
use integration_weather::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for weather services using the Open-Meteo forecast API
pub struct WeatherAdapter {
    client: Box<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"WeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Create from an existing client
    #[must_use]
    pub fn with_client(client: Box<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
            WeatherError::ConnectionFailed(_) => ApplicationError::Internal(err.to_string()),
            other => ApplicationError::ExternalService(format!("Weather provider: {other}")),
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReading, ApplicationError> {
        let conditions = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(
            fields = conditions.values.len(),
            timezone = ?conditions.timezone,
            "Fetched current weather"
        );

        Ok(WeatherReading::from_current(conditions.values))
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use integration_weather::CurrentConditions;
    use serde_json::{Map, json};

    struct StubClient {
        result: fn() -> Result<CurrentConditions, WeatherError>,
    }

    #[async_trait]
    impl WeatherClient for StubClient {
        async fn get_current(
            &self,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<CurrentConditions, WeatherError> {
            (self.result)()
        }

        async fn is_healthy(&self) -> bool {
            (self.result)().is_ok()
        }
    }

    fn adapter(result: fn() -> Result<CurrentConditions, WeatherError>) -> WeatherAdapter {
        WeatherAdapter::with_client(Box::new(StubClient { result }))
    }

    fn conditions() -> Result<CurrentConditions, WeatherError> {
        let values: Map<_, _> = json!({"temperature_2m": 25.0, "wind_speed_10m": 5})
            .as_object()
            .cloned()
            .unwrap_or_default();
        Ok(CurrentConditions {
            timezone: Some("Asia/Kolkata".into()),
            elevation: None,
            values,
        })
    }

    #[test]
    fn map_error_classification() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::RateLimitExceeded),
            ApplicationError::RateLimited
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::Timeout(30)),
            ApplicationError::ExternalService(ref m) if m == "Weather provider: Request timed out after 30s"
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ConnectionFailed("tls".into())),
            ApplicationError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn current_weather_wraps_provider_block() {
        let reading = adapter(conditions)
            .current_weather(&GeoLocation::new_unchecked(28.6, 77.2))
            .await
            .unwrap();

        assert_eq!(reading.temperature(), Some(25.0));
        assert_eq!(reading.wind_speed(), Some(5.0));
        assert_eq!(reading.humidity(), None);
    }

    #[tokio::test]
    async fn availability_follows_client() {
        assert!(adapter(conditions).is_available().await);
        assert!(
            !adapter(|| Err(WeatherError::ServiceUnavailable("HTTP 503".into())))
                .is_available()
                .await
        );
    }
}

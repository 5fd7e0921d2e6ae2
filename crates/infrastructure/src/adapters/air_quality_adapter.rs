//! Air-quality adapter - Implements AirQualityPort using integration_air_quality

use application::error::ApplicationError;
use application::ports::AirQualityPort;
use async_trait::async_trait;
use domain::{AirQualityReading, GeoLocation};
use integration_air_quality::{
    AirQualityClient, AirQualityConfig, AirQualityError, OpenMeteoAirQualityClient,
};
use tracing::{debug, instrument};

/// Adapter for the Open-Meteo air-quality API
pub struct AirQualityAdapter {
    client: Box<dyn AirQualityClient>,
}

impl std::fmt::Debug for AirQualityAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AirQualityAdapter")
            .field("client", &"AirQualityClient")
            .finish()
    }
}

impl AirQualityAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: AirQualityConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoAirQualityClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self::with_client(Box::new(client)))
    }

    /// Create from an existing client
    #[must_use]
    pub fn with_client(client: Box<dyn AirQualityClient>) -> Self {
        Self { client }
    }

    /// Every provider failure is fatal to the analysis, so all of them
    /// surface as external-service errors.
    fn map_error(err: AirQualityError) -> ApplicationError {
        ApplicationError::ExternalService(format!("Air-quality provider: {err}"))
    }
}

#[async_trait]
impl AirQualityPort for AirQualityAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn current_air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQualityReading, ApplicationError> {
        let current = self
            .client
            .get_current(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;

        debug!(
            fields = current.values.len(),
            timezone = ?current.timezone,
            "Fetched current air quality"
        );

        Ok(AirQualityReading::from_current(current.values))
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

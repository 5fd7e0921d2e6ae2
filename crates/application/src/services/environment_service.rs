//! Environment service - Concurrent air-quality and weather retrieval

use std::{fmt, sync::Arc};

use domain::{AirQualityReading, GeoLocation, WeatherReading};
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{AirQualityPort, WeatherPort},
};

/// Readings gathered for a single location
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentReadings {
    pub air_quality: AirQualityReading,
    pub weather: WeatherReading,
}

/// Fetches the two environmental readings for a location
///
/// Air quality is required and its failure fails the fetch. Weather is
/// best-effort and degrades to an empty reading.
#[derive(Clone)]
pub struct EnvironmentService {
    air_quality: Arc<dyn AirQualityPort>,
    weather: Arc<dyn WeatherPort>,
}

impl fmt::Debug for EnvironmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentService").finish_non_exhaustive()
    }
}

impl EnvironmentService {
    /// Create a new environment service
    pub fn new(air_quality: Arc<dyn AirQualityPort>, weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            air_quality,
            weather,
        }
    }

    /// Fetch both readings concurrently
    ///
    /// # Errors
    ///
    /// Returns the air-quality port's error when the air-quality fetch fails.
    /// Weather failures never surface here.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn fetch(
        &self,
        location: &GeoLocation,
    ) -> Result<EnvironmentReadings, ApplicationError> {
        let (air_quality, weather) = tokio::join!(
            self.air_quality.current_air_quality(location),
            self.weather.current_weather(location),
        );

        let air_quality = air_quality.inspect_err(|e| {
            warn!(error = %e, "Air-quality fetch failed");
        })?;

        let weather = weather.unwrap_or_else(|e| {
            warn!(error = %e, "Weather fetch failed, continuing without weather data");
            WeatherReading::empty()
        });

        debug!(
            air_quality_fields = air_quality.as_map().len(),
            weather_fields = weather.as_map().len(),
            "Environment readings fetched"
        );

        Ok(EnvironmentReadings {
            air_quality,
            weather,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{MockAirQualityPort, MockWeatherPort};
    use serde_json::json;

    fn air_quality_reading() -> AirQualityReading {
        let json = json!({"us_aqi": 42, "pm2_5": 10.0, "pm10": 20.0});
        AirQualityReading::from_current(json.as_object().cloned().unwrap_or_default())
    }

    fn weather_reading() -> WeatherReading {
        let json = json!({"temperature_2m": 25.0, "relative_humidity_2m": 60, "wind_speed_10m": 5.0});
        WeatherReading::from_current(json.as_object().cloned().unwrap_or_default())
    }

    fn location() -> GeoLocation {
        GeoLocation::new_unchecked(28.61, 77.2)
    }

    #[tokio::test]
    async fn returns_both_readings_on_success() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .times(1)
            .returning(|_| Ok(air_quality_reading()));

        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .times(1)
            .returning(|_| Ok(weather_reading()));

        let service = EnvironmentService::new(Arc::new(air_quality), Arc::new(weather));
        let readings = service.fetch(&location()).await.unwrap();

        assert_eq!(readings.air_quality, air_quality_reading());
        assert_eq!(readings.weather, weather_reading());
    }

    #[tokio::test]
    async fn weather_failure_degrades_to_empty_reading() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .returning(|_| Ok(air_quality_reading()));

        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 503".into())));

        let service = EnvironmentService::new(Arc::new(air_quality), Arc::new(weather));
        let readings = service.fetch(&location()).await.unwrap();

        assert!(!readings.air_quality.is_empty());
        assert!(readings.weather.is_empty());
    }

    #[tokio::test]
    async fn air_quality_failure_fails_fetch() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 500".into())));

        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Ok(weather_reading()));

        let service = EnvironmentService::new(Arc::new(air_quality), Arc::new(weather));
        let result = service.fetch(&location()).await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn passes_location_to_both_ports() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .withf(|loc| (loc.latitude() - 28.61).abs() < f64::EPSILON)
            .returning(|_| Ok(AirQualityReading::empty()));

        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .withf(|loc| (loc.longitude() - 77.2).abs() < f64::EPSILON)
            .returning(|_| Ok(WeatherReading::empty()));

        let service = EnvironmentService::new(Arc::new(air_quality), Arc::new(weather));
        assert!(service.fetch(&location()).await.is_ok());
    }
}

//! Analysis service - The `/analyze` use case

use domain::{EnvironmentReport, GeoLocation};
use tracing::{info, instrument};

use super::{AdvisoryInputs, AdvisoryService, EnvironmentService};
use crate::error::ApplicationError;

/// Fetches readings for a location and attaches a health advisory
#[derive(Debug, Clone)]
pub struct AnalysisService {
    environment: EnvironmentService,
    advisory: AdvisoryService,
}

impl AnalysisService {
    /// Create a new analysis service
    #[must_use]
    pub fn new(environment: EnvironmentService, advisory: AdvisoryService) -> Self {
        Self {
            environment,
            advisory,
        }
    }

    /// Analyze a location
    ///
    /// # Errors
    ///
    /// Fails only when the air-quality reading cannot be fetched; the
    /// advisory is not requested in that case.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn analyze(
        &self,
        location: &GeoLocation,
    ) -> Result<EnvironmentReport, ApplicationError> {
        let readings = self.environment.fetch(location).await?;

        let inputs = AdvisoryInputs::from_readings(&readings.air_quality, &readings.weather);
        let analysis = self.advisory.generate(&inputs).await;

        info!(
            aqi = ?inputs.aqi,
            weather_available = !readings.weather.is_empty(),
            advisory_available = !analysis.is_unavailable(),
            "Analysis completed"
        );

        Ok(EnvironmentReport {
            aqi_data: readings.air_quality,
            weather_data: readings.weather,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ports::{InferenceResult, MockAirQualityPort, MockInferencePort, MockWeatherPort};
    use domain::{AirQualityReading, WeatherReading};
    use serde_json::json;

    fn air_quality_reading() -> AirQualityReading {
        AirQualityReading::from_current(
            json!({"time": "2024-11-10T14:00", "us_aqi": 42, "pm2_5": 10, "pm10": 20})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        )
    }

    fn weather_reading() -> WeatherReading {
        WeatherReading::from_current(
            json!({"temperature_2m": 25, "relative_humidity_2m": 60, "wind_speed_10m": 5})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        )
    }

    fn service(
        air_quality: MockAirQualityPort,
        weather: MockWeatherPort,
        inference: MockInferencePort,
    ) -> AnalysisService {
        AnalysisService::new(
            EnvironmentService::new(Arc::new(air_quality), Arc::new(weather)),
            AdvisoryService::new(Arc::new(inference)),
        )
    }

    fn location() -> GeoLocation {
        GeoLocation::new_unchecked(28.61, 77.2)
    }

    #[tokio::test]
    async fn assembles_report_from_readings_and_advisory() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .returning(|_| Ok(air_quality_reading()));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Ok(weather_reading()));
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .withf(|prompt| prompt.contains("US AQI: 42") && prompt.contains("PM2.5: 10"))
            .times(1)
            .returning(|_| {
                Ok(InferenceResult {
                    content: "Limit outdoor exercise.".to_string(),
                    model: "llama-3.1-8b-instant".to_string(),
                    tokens_used: None,
                    latency_ms: 10,
                })
            });

        let report = service(air_quality, weather, inference)
            .analyze(&location())
            .await
            .unwrap();

        assert_eq!(report.aqi_data, air_quality_reading());
        assert_eq!(report.weather_data, weather_reading());
        assert_eq!(report.analysis.as_str(), "Limit outdoor exercise.");
    }

    #[tokio::test]
    async fn air_quality_failure_skips_inference() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 500".into())));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Ok(weather_reading()));
        let mut inference = MockInferencePort::new();
        inference.expect_generate().times(0);

        let result = service(air_quality, weather, inference)
            .analyze(&location())
            .await;

        assert!(matches!(result, Err(ApplicationError::ExternalService(_))));
    }

    #[tokio::test]
    async fn weather_failure_renders_placeholders() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .returning(|_| Ok(air_quality_reading()));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Err(ApplicationError::ExternalService("timeout".into())));
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .withf(|prompt| {
                prompt.contains("Temperature: N/A°C")
                    && prompt.contains("Humidity: N/A%")
                    && prompt.contains("Wind Speed: N/A km/h")
            })
            .times(1)
            .returning(|_| {
                Ok(InferenceResult {
                    content: "Stay hydrated.".to_string(),
                    model: "llama-3.1-8b-instant".to_string(),
                    tokens_used: None,
                    latency_ms: 10,
                })
            });

        let report = service(air_quality, weather, inference)
            .analyze(&location())
            .await
            .unwrap();

        assert!(report.weather_data.is_empty());
        assert_eq!(serde_json::to_value(&report.weather_data).unwrap(), json!({}));
    }

    #[tokio::test]
    async fn inference_failure_still_returns_report() {
        let mut air_quality = MockAirQualityPort::new();
        air_quality
            .expect_current_air_quality()
            .returning(|_| Ok(air_quality_reading()));
        let mut weather = MockWeatherPort::new();
        weather
            .expect_current_weather()
            .returning(|_| Ok(weather_reading()));
        let mut inference = MockInferencePort::new();
        inference
            .expect_generate()
            .returning(|_| Err(ApplicationError::Configuration("GROQ_API_KEY is not set".into())));

        let report = service(air_quality, weather, inference)
            .analyze(&location())
            .await
            .unwrap();

        assert_eq!(
            report.analysis.as_str(),
            "AI Analysis unavailable: Configuration error: GROQ_API_KEY is not set"
        );
    }
}

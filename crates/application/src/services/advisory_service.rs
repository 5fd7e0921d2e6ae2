//! Advisory service - Health tips from environmental readings
//!
//! Renders the readings into a fixed prompt and asks the language model for
//! plain-sentence health advice. Inference failures never fail the request;
//! they become an "unavailable" advisory instead.

use std::{fmt, sync::Arc};

use domain::{AdvisoryText, AirQualityReading, WeatherReading};
use tracing::{debug, instrument, warn};

use crate::ports::InferencePort;

/// Placeholder rendered for a reading the provider did not report
pub const MISSING_VALUE: &str = "N/A";

/// The six readings the advisory prompt is built from
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AdvisoryInputs {
    pub aqi: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl AdvisoryInputs {
    /// Extract the prompt inputs from provider readings
    #[must_use]
    pub fn from_readings(air_quality: &AirQualityReading, weather: &WeatherReading) -> Self {
        Self {
            aqi: air_quality.us_aqi(),
            pm2_5: air_quality.pm2_5(),
            pm10: air_quality.pm10(),
            temperature: weather.temperature(),
            humidity: weather.humidity(),
            wind_speed: weather.wind_speed(),
        }
    }
}

fn render_value(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

/// Render the advisory prompt for the given inputs
#[must_use]
pub fn render_prompt(inputs: &AdvisoryInputs) -> String {
    let aqi = render_value(inputs.aqi);
    let pm25 = render_value(inputs.pm2_5);
    let pm10 = render_value(inputs.pm10);
    let temp = render_value(inputs.temperature);
    let humidity = render_value(inputs.humidity);
    let wind = render_value(inputs.wind_speed);

    format!(
        "Analyze the following Environmental data for a location:
US AQI: {aqi}
PM2.5: {pm25}
PM10: {pm10}
Temperature: {temp}°C
Humidity: {humidity}%
Wind Speed: {wind} km/h

Provide a list of 5-6 clear, actionable health tips based strictly on this specific data.
Format your response as a simple list of sentences, one per line.

CRITICAL INSTRUCTIONS:
- You MUST explicitly reference the current AQI ({aqi}) or specific pollutants (e.g., PM2.5 at {pm25}) in at least one of your tips to show the advice is live.
- Tailor the advice specifically to these conditions.

CRITICAL FORMATTING RULES:
- Do NOT use headers or categories (e.g., \"Health Risk:\", \"Recommendations:\").
- Do NOT use bold text (e.g., **text**).
- Do NOT use bullet symbols (-, *, •).
- Do NOT use introductory or concluding text.
- Just write the advice directly.

Example Output:
Wear a mask if you need to be outdoors.
Keep windows closed to prevent outdoor air from entering.
Sensitive groups should avoid outdoor exertion.
Run an air purifier if available."
    )
}

/// Generates health advisories through the inference port
#[derive(Clone)]
pub struct AdvisoryService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for AdvisoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisoryService").finish_non_exhaustive()
    }
}

impl AdvisoryService {
    /// Create a new advisory service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Generate an advisory, degrading to an "unavailable" text on failure
    #[instrument(skip(self))]
    pub async fn generate(&self, inputs: &AdvisoryInputs) -> AdvisoryText {
        let prompt = render_prompt(inputs);

        match self.inference.generate(&prompt).await {
            Ok(result) => {
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = result.latency_ms,
                    "Advisory generated"
                );
                AdvisoryText::generated(result.content)
            },
            Err(e) => {
                warn!(error = %e, "Advisory generation failed");
                AdvisoryText::unavailable(e)
            },
        }
    }
}

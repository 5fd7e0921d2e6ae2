//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod air_quality_adapter;
mod groq_inference_adapter;
mod weather_adapter;

pub use air_quality_adapter::AirQualityAdapter;
pub use groq_inference_adapter::GroqInferenceAdapter;
pub use weather_adapter::WeatherAdapter;

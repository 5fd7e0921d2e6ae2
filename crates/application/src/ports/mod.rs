//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod air_quality_port;
mod inference_port;
mod weather_port;

#[cfg(test)]
pub use air_quality_port::MockAirQualityPort;
pub use air_quality_port::AirQualityPort;
#[cfg(test)]
pub use inference_port::MockInferencePort;
pub use inference_port::{InferencePort, InferenceResult};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;

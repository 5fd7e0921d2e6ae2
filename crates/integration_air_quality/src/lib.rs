//! Open-Meteo air-quality integration
//!
//! Client for the Open-Meteo Air Quality API
//! (<https://open-meteo.com/en/docs/air-quality-api>). Returns the current
//! pollutant concentrations and US AQI for a coordinate. No API key required.

pub mod client;
mod models;

pub use client::{
    AirQualityClient, AirQualityConfig, AirQualityError, OpenMeteoAirQualityClient,
};
pub use models::CurrentAirQuality;

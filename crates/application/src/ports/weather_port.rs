//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::{GeoLocation, WeatherReading};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get the provider's current weather block for a location
    async fn current_weather(
        &self,
        location: &GeoLocation,
    ) -> Result<WeatherReading, ApplicationError>;

    /// Check if the weather service is available
    async fn is_available(&self) -> bool;
}

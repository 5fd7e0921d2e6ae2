//! Air-quality service port
//!
//! Defines the interface for current air-quality retrieval.

use async_trait::async_trait;
use domain::{AirQualityReading, GeoLocation};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for air-quality provider operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Get the provider's current air-quality block for a location
    ///
    /// A provider response without a `current` block yields an empty reading.
    async fn current_air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQualityReading, ApplicationError>;

    /// Check if the air-quality service is available
    async fn is_available(&self) -> bool;
}

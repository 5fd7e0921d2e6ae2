//! Application state shared across handlers

use std::sync::Arc;

use application::{AnalysisService, HealthService};

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Runs the fetch-and-advise pipeline for `/analyze`
    pub analysis_service: Arc<AnalysisService>,
    /// Probes upstream dependencies for `/ready`
    pub health_service: Arc<HealthService>,
    /// Reject coordinates outside the WGS84 degree ranges
    pub enforce_coordinate_bounds: bool,
}

impl AppState {
    /// Create state with coordinate bounds enforcement disabled
    #[must_use]
    pub fn new(analysis_service: AnalysisService, health_service: HealthService) -> Self {
        Self {
            analysis_service: Arc::new(analysis_service),
            health_service: Arc::new(health_service),
            enforce_coordinate_bounds: false,
        }
    }

    /// Enable or disable coordinate bounds enforcement
    #[must_use]
    pub const fn with_coordinate_bounds(mut self, enforce: bool) -> Self {
        self.enforce_coordinate_bounds = enforce;
        self
    }
}

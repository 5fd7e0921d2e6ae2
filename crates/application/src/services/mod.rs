//! Application services - Use case implementations

mod advisory_service;
mod analysis_service;
mod environment_service;
mod health_service;

pub use advisory_service::{AdvisoryInputs, AdvisoryService, MISSING_VALUE, render_prompt};
pub use analysis_service::AnalysisService;
pub use environment_service::{EnvironmentReadings, EnvironmentService};
pub use health_service::{
    AIR_QUALITY_SERVICE, HealthConfig, HealthReport, HealthService, INFERENCE_SERVICE,
    ServiceHealth, WEATHER_SERVICE,
};

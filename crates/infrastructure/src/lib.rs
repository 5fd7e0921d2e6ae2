//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! Open-Meteo and Groq clients, and owns configuration and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, HealthAppConfig, LogFormat, ServerConfig, TelemetryAppConfig};
pub use telemetry::{TelemetryError, init_tracing};

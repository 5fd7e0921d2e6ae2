//! Logging initialization
//!
//! Installs the global `tracing` subscriber with an env filter and either
//! human-readable or JSON output.

mod subscriber;

pub use subscriber::{TelemetryError, build_env_filter, init_tracing};

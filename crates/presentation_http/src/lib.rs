//! AirWise HTTP presentation layer
//!
//! This crate provides the HTTP API for AirWise: the `/analyze` endpoint
//! plus liveness and readiness probes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use middleware::{ValidatedJson, cors_layer};
pub use routes::{create_app, create_router};
pub use state::AppState;

//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use infrastructure::ServerConfig;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, middleware::cors_layer, state::AppState};

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Analysis API
        .route("/analyze", post(handlers::analyze::analyze))
        .with_state(state)
}

/// Create the router wrapped in tracing, CORS and body-limit layers
pub fn create_app(state: AppState, server: &ServerConfig) -> Router {
    // Order matters: last added = outermost
    create_router(state)
        .layer(RequestBodyLimitLayer::new(server.max_body_size_json_bytes))
        .layer(cors_layer(&server.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

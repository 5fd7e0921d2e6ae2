//! API error handling
//!
//! Every error response carries `{"detail": ..., "code": ...}`. Upstream
//! failure details are logged, never returned to the caller.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Message returned when the air-quality provider cannot be reached
pub const DEPENDENCY_FAILURE_DETAIL: &str = "Failed to fetch AQI data";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is missing, malformed or out of range
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Request body exceeds the configured limit
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// A required upstream provider failed
    #[error("Dependency failure: {0}")]
    DependencyFailure(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub detail: String,
    /// Machine-readable error code
    pub code: String,
}

impl ApiError {
    /// HTTP status for this error
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::DependencyFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable code for this error
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::DependencyFailure(_) => "dependency_failure",
            Self::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            Self::Validation(msg) | Self::PayloadTooLarge(msg) => msg.clone(),
            Self::DependencyFailure(msg) => {
                error!(error = %msg, "Required provider failed");
                DEPENDENCY_FAILURE_DETAIL.to_string()
            },
            Self::Internal(msg) => {
                error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            },
        };

        let body = ErrorResponse {
            detail,
            code: self.code().to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => Self::Validation(e.to_string()),
            e @ (ApplicationError::ExternalService(_) | ApplicationError::RateLimited) => {
                Self::DependencyFailure(e.to_string())
            },
            e @ (ApplicationError::Inference(_)
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_)) => Self::Internal(e.to_string()),
        }
    }
}

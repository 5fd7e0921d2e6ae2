//! `tracing-subscriber` setup

use thiserror::Error;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, TelemetryAppConfig};

/// Errors during logging initialization
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Filter directives could not be parsed
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber was already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the env filter, preferring `RUST_LOG` over the configured directives
///
/// # Errors
///
/// Returns an error if `RUST_LOG` is unset and the configured filter is invalid.
pub fn build_env_filter(config: &TelemetryAppConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(&config.log_filter).map_err(|e| TelemetryError::InvalidFilter {
            filter: config.log_filter.clone(),
            reason: e.to_string(),
        })
    })
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &TelemetryAppConfig, format: LogFormat) -> Result<(), TelemetryError> {
    let env_filter = build_env_filter(config)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(format = ?format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_is_accepted() {
        // RUST_LOG may be set in CI; either source must produce a filter
        let config = TelemetryAppConfig::default();
        assert!(build_env_filter(&config).is_ok());
    }

    #[test]
    fn invalid_filter_error_message() {
        let err = TelemetryError::InvalidFilter {
            filter: "=[".to_string(),
            reason: "bad directive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid log filter '=[': bad directive");
    }

    #[test]
    fn second_init_fails() {
        let config = TelemetryAppConfig::default();
        let first = init_tracing(&config, LogFormat::Text);
        let second = init_tracing(&config, LogFormat::Json);
        // Another test in this binary may have installed a subscriber first
        assert!(first.is_ok() || matches!(first, Err(TelemetryError::Init(_))));
        assert!(matches!(second, Err(TelemetryError::Init(_))));
    }
}

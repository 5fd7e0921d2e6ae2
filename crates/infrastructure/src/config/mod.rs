//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `resilience`: Health checks and logging
//!
//! Provider and inference settings reuse the client crates' own config types.

mod resilience;
mod server;

use std::path::Path;

use ai_core::InferenceConfig;
use integration_air_quality::AirQualityConfig;
use integration_weather::WeatherConfig;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use resilience::{HealthAppConfig, TelemetryAppConfig};
pub use server::{LogFormat, ServerConfig};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "AIRWISE";

/// Conventional variable holding the Groq API key
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Inference configuration
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Air-quality provider configuration
    #[serde(default)]
    pub air_quality: AirQualityConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Health check configuration
    #[serde(default)]
    pub health: HealthAppConfig,

    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load configuration from defaults, optional `config.toml` and environment
    ///
    /// Environment variables use the `AIRWISE_` prefix with `__` between
    /// nesting levels, e.g. `AIRWISE_SERVER__PORT=8080`. When no API key is
    /// configured, `GROQ_API_KEY` is used.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or the merged values do not
    /// deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut config = Self::build(None, None)?;
        config.apply_api_key_fallback(|name| std::env::var(name).ok());
        Ok(config)
    }

    fn build(
        file: Option<&Path>,
        env_source: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            .add_source(file_source)
            // Override with environment variables (e.g., AIRWISE_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true)
                    .source(env_source),
            );

        builder.build()?.try_deserialize()
    }

    /// Fill a missing or blank API key from `GROQ_API_KEY`
    fn apply_api_key_fallback(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.inference.has_api_key() {
            return;
        }
        if let Some(key) = lookup(GROQ_API_KEY_VAR).filter(|k| !k.trim().is_empty()) {
            self.inference.api_key = Some(SecretString::from(key));
            debug!("Loaded inference.api_key from {GROQ_API_KEY_VAR}");
        }
    }

    /// Warnings about settings that degrade functionality
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.inference.has_api_key() {
            warnings.push(format!(
                "No inference API key configured (set {GROQ_API_KEY_VAR} or \
                 {ENV_PREFIX}_INFERENCE__API_KEY); analyses will report the advisory as unavailable"
            ));
        }
        warnings
    }
}

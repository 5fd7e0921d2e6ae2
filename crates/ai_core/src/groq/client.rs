//! Groq client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::{debug, info, instrument, warn};

use super::wire::{ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope};
use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InferenceRequest, InferenceResponse};

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Chat-completion engine backed by Groq
pub struct GroqInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl std::fmt::Debug for GroqInferenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqInferenceEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GroqInferenceEngine {
    /// Create a new Groq inference engine
    ///
    /// A missing API key is not an error here; requests fail with
    /// [`InferenceError::Configuration`] until one is provided.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        if config.has_api_key() {
            info!(
                base_url = %config.base_url,
                model = %config.default_model,
                "Initialized Groq inference engine"
            );
        } else {
            warn!(
                base_url = %config.base_url,
                "Groq API key is not configured; advisory generation will be unavailable"
            );
        }

        Ok(Self { client, config })
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn api_key(&self) -> Result<&str, InferenceError> {
        self.config
            .api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| InferenceError::Configuration("GROQ_API_KEY is not set".to_string()))
    }

    fn map_transport_error(&self, err: &reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            InferenceError::Timeout(self.config.timeout_ms)
        } else if err.is_connect() {
            InferenceError::ConnectionFailed(err.to_string())
        } else {
            InferenceError::RequestFailed(err.to_string())
        }
    }
}

/// Map a non-success status and its body to an error
fn status_error(status: StatusCode, body: &str) -> InferenceError {
    let detail = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| format!("Status {status}: {body}"));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => InferenceError::Unauthorized(detail),
        StatusCode::NOT_FOUND => InferenceError::ModelNotAvailable(detail),
        StatusCode::TOO_MANY_REQUESTS => InferenceError::RateLimited,
        s if s.is_server_error() => InferenceError::ServerError(detail),
        _ => InferenceError::RequestFailed(detail),
    }
}

#[async_trait]
impl InferenceEngine for GroqInferenceEngine {
    #[instrument(skip(self, request), fields(model = %self.config.default_model))]
    async fn generate(
        &self,
        request: InferenceRequest,
    ) -> Result<InferenceResponse, InferenceError> {
        let api_key = self.api_key()?;
        let model = self.config.default_model.as_str();

        let body = ChatCompletionRequest {
            model,
            messages: &request.messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        debug!(messages = request.messages.len(), "Sending chat completion request");

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "Chat completion request failed");
            return Err(status_error(status, &body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| InferenceError::InvalidResponse("response has no choices".into()))?;

        let content = choice.message.content.unwrap_or_default();
        let usage = completion.usage.map(Into::into);

        debug!(tokens = ?usage, "Inference completed");

        Ok(InferenceResponse {
            content,
            model: completion.model.unwrap_or_else(|| model.to_string()),
            usage,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, InferenceError> {
        let Ok(api_key) = self.api_key() else {
            return Ok(false);
        };

        let response = self
            .client
            .get(self.api_url("models"))
            .bearer_auth(api_key)
            .timeout(HEALTH_CHECK_TIMEOUT)
            .send()
            .await;

        match response {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) if e.is_timeout() || e.is_connect() => Ok(false),
            Err(e) => Err(InferenceError::RequestFailed(e.to_string())),
        }
    }

    fn default_model(&self) -> &str {
        &self.config.default_model
    }
}

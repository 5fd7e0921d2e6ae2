//! AI Core - Inference engine abstractions
//!
//! Provides a chat-completion engine for Groq's OpenAI-compatible API.

pub mod config;
pub mod error;
pub mod groq;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use groq::GroqInferenceEngine;
pub use ports::{InferenceEngine, InferenceMessage, InferenceRequest, InferenceResponse, TokenUsage};

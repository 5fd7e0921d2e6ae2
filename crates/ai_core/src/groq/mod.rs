//! Groq inference engine implementation
//!
//! Talks to Groq's OpenAI-compatible chat-completions API. Any server exposing
//! the same `/chat/completions` contract works as well.

mod client;
mod wire;

pub use client::GroqInferenceEngine;

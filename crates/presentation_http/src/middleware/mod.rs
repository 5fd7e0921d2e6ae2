//! HTTP middleware components
//!
//! Cross-origin policy and the JSON body extractor.

pub mod cors;
pub mod validation;

pub use cors::cors_layer;
pub use validation::ValidatedJson;

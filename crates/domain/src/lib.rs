//! Domain layer for AirWise
//!
//! Contains the request-scoped values the analysis pipeline passes around:
//! the coordinate being analyzed, the provider readings, and the advisory text.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

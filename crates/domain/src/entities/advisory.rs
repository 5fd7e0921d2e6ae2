//! Advisory text returned alongside the readings

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix of the text substituted when advisory generation fails
pub const ADVISORY_UNAVAILABLE_PREFIX: &str = "AI Analysis unavailable: ";

/// Health advisory for the analyzed location
///
/// Never null: either model-generated text or a synthesized
/// "unavailable" message carrying the failure reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisoryText(String);

impl AdvisoryText {
    /// Wrap model-generated text
    pub fn generated(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build the fallback text for a failed generation
    pub fn unavailable(reason: impl fmt::Display) -> Self {
        Self(format!("{ADVISORY_UNAVAILABLE_PREFIX}{reason}"))
    }

    /// Whether this is the fallback text
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.0.starts_with(ADVISORY_UNAVAILABLE_PREFIX)
    }

    /// Borrow the text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdvisoryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

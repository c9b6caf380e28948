//! Generator outcome values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way result of a generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The artifact was produced.
    Success,
    /// An incomplete artifact was produced.
    Partial,
    /// No usable artifact was produced.
    Failure,
}

impl OutcomeKind {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Partial => "partial",
            Self::Failure => "failure",
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the generator reported for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Outcome classification.
    pub kind: OutcomeKind,
    /// Generated content, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Error detail, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerationOutcome {
    /// A successful outcome carrying `content`.
    #[must_use]
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            content: Some(content.into()),
            error: None,
        }
    }

    /// A partial outcome carrying whatever content was produced.
    #[must_use]
    pub fn partial(content: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Partial,
            content: Some(content.into()),
            error: None,
        }
    }

    /// A failed outcome with an error detail.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Failure,
            content: None,
            error: Some(error.into()),
        }
    }

    /// Attaches an error detail, e.g. to explain a partial result.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }
}

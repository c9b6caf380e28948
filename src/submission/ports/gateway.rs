//! Submission gateway port.

use crate::application::domain::Application;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for submission attempts.
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// What a gateway reports after handling an eligible application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReceipt {
    /// The application reached the employer.
    Submitted,
    /// The gateway did not submit; the reason is user-facing.
    NotSubmitted(String),
}

/// Integration that submits an eligible application.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
    /// Attempts submission of `application`.
    async fn submit(&self, application: &Application) -> SubmissionResult<SubmissionReceipt>;
}

/// Errors raised when the gateway itself fails.
#[derive(Debug, Clone, Error)]
pub enum SubmissionError {
    /// Transport-level failure talking to the integration.
    #[error("submission transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SubmissionError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

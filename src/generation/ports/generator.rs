//! Artifact generator port.

use crate::application::domain::ApplicationId;
use crate::generation::domain::GenerationOutcome;
use crate::task::domain::TaskType;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for generator calls.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// External AI capability producing artifacts for an application.
///
/// Implementations report business failures through
/// [`crate::generation::domain::OutcomeKind::Failure`] and reserve
/// [`GeneratorError`] for the call itself going wrong.
#[async_trait]
pub trait ArtifactGenerator: Send + Sync {
    /// Generates one artifact of `task_type` for `application_id`.
    async fn generate(
        &self,
        application_id: ApplicationId,
        task_type: TaskType,
    ) -> GeneratorResult<GenerationOutcome>;
}

/// Errors raised when the generator could not be reached.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// Transport-level failure talking to the generator.
    #[error("artifact generator transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl GeneratorError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}

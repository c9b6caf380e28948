//! Error type for orchestration operations.

use crate::application::{
    domain::{ApplicationDomainError, ApplicationId},
    ports::ApplicationRepositoryError,
};
use crate::identity::{domain::UserId, ports::CredentialError};
use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError};
use thiserror::Error;

/// Errors surfaced by [`super::Orchestrator`].
///
/// Generation and submission failures never appear here: they settle into
/// task and application states instead. Audit failures are logged.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// No application exists with the given identifier.
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),

    /// The acting user does not own the application.
    #[error("application {application_id} is not owned by user {user_id}")]
    NotOwner {
        /// Application identifier.
        application_id: ApplicationId,
        /// Acting user.
        user_id: UserId,
    },

    /// Application validation failed.
    #[error(transparent)]
    ApplicationDomain(#[from] ApplicationDomainError),

    /// Task validation failed.
    #[error(transparent)]
    TaskDomain(#[from] TaskDomainError),

    /// The application store failed.
    #[error(transparent)]
    ApplicationStore(#[from] ApplicationRepositoryError),

    /// The task store failed.
    #[error(transparent)]
    TaskStore(#[from] TaskRepositoryError),

    /// The credential verifier failed.
    #[error(transparent)]
    Credentials(#[from] CredentialError),
}

impl OrchestratorError {
    /// Returns whether the error came from a persistence layer.
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::ApplicationStore(_) | Self::TaskStore(_))
    }

    /// Returns whether the request was rejected before any state change.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ApplicationNotFound(_)
                | Self::NotOwner { .. }
                | Self::ApplicationDomain(_)
                | Self::TaskDomain(_)
        )
    }
}

/// Result type for orchestration operations.
pub type OrchestratorResult<T> = Result<T, OrchestratorError>;

//! Repository port for application persistence and lookup.

use crate::application::domain::{Application, ApplicationId};
use crate::identity::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for application repository operations.
pub type ApplicationRepositoryResult<T> = Result<T, ApplicationRepositoryError>;

/// Application persistence contract.
///
/// Implementations hold no business rules; they store whatever the
/// orchestrator hands them.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Inserts or replaces an application.
    async fn save(&self, application: &Application) -> ApplicationRepositoryResult<()>;

    /// Finds an application by identifier.
    ///
    /// Returns `None` when the application does not exist.
    async fn find_by_id(&self, id: ApplicationId)
    -> ApplicationRepositoryResult<Option<Application>>;

    /// Returns every application owned by `user_id`, oldest first.
    async fn find_by_user_id(&self, user_id: UserId)
    -> ApplicationRepositoryResult<Vec<Application>>;
}

/// Errors returned by application repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ApplicationRepositoryError {
    /// An existing application would change owner or job.
    #[error("application {0} cannot change its user or job reference")]
    ImmutableReference(ApplicationId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ApplicationRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

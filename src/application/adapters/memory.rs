//! In-memory repository for applications.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::application::{
    domain::{Application, ApplicationId},
    ports::{ApplicationRepository, ApplicationRepositoryError, ApplicationRepositoryResult},
};
use crate::identity::domain::UserId;

/// Thread-safe in-memory application repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryApplicationRepository {
    state: Arc<RwLock<InMemoryApplicationState>>,
}

#[derive(Debug, Default)]
struct InMemoryApplicationState {
    applications: HashMap<ApplicationId, Application>,
    user_index: HashMap<UserId, Vec<ApplicationId>>,
}

impl InMemoryApplicationRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> ApplicationRepositoryError {
    ApplicationRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn save(&self, application: &Application) -> ApplicationRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;

        let existing_refs = state
            .applications
            .get(&application.id())
            .map(|existing| (existing.user_id(), existing.job_id()));

        match existing_refs {
            Some((user_id, job_id))
                if user_id != application.user_id() || job_id != application.job_id() =>
            {
                return Err(ApplicationRepositoryError::ImmutableReference(
                    application.id(),
                ));
            }
            Some(_) => {}
            None => state
                .user_index
                .entry(application.user_id())
                .or_default()
                .push(application.id()),
        }

        state
            .applications
            .insert(application.id(), application.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ApplicationId,
    ) -> ApplicationRepositoryResult<Option<Application>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.applications.get(&id).cloned())
    }

    async fn find_by_user_id(
        &self,
        user_id: UserId,
    ) -> ApplicationRepositoryResult<Vec<Application>> {
        let state = self.state.read().map_err(lock_error)?;
        let applications = state
            .user_index
            .get(&user_id)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.applications.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        Ok(applications)
    }
}

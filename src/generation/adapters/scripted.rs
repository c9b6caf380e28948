//! Scripted artifact generator for tests and local wiring.

use crate::application::domain::ApplicationId;
use crate::generation::{
    domain::GenerationOutcome,
    ports::{ArtifactGenerator, GeneratorError, GeneratorResult},
};
use crate::task::domain::TaskType;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Canned reply for one task type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedResponse {
    /// Return the outcome immediately.
    Reply(GenerationOutcome),
    /// Return the outcome after sleeping for the given duration.
    Delayed(Duration, GenerationOutcome),
    /// Fail the call with a transport error carrying this message.
    Unreachable(String),
}

/// Artifact generator that answers from a script instead of calling a
/// model.
///
/// Unscripted task types succeed with placeholder text. Every call is
/// recorded so tests can assert whether the generator was contacted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedArtifactGenerator {
    state: Arc<RwLock<ScriptState>>,
}

#[derive(Debug, Default)]
struct ScriptState {
    responses: HashMap<TaskType, ScriptedResponse>,
    calls: Vec<(ApplicationId, TaskType)>,
}

fn lock_error(err: impl ToString) -> GeneratorError {
    GeneratorError::transport(std::io::Error::other(err.to_string()))
}

impl ScriptedArtifactGenerator {
    /// Creates a generator with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply for `task_type`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Transport`] when lock acquisition fails.
    pub fn script(&self, task_type: TaskType, response: ScriptedResponse) -> GeneratorResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.responses.insert(task_type, response);
        Ok(())
    }

    /// Returns every `(application, task type)` pair requested so far.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::Transport`] when lock acquisition fails.
    pub fn calls(&self) -> GeneratorResult<Vec<(ApplicationId, TaskType)>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.calls.clone())
    }
}

#[async_trait]
impl ArtifactGenerator for ScriptedArtifactGenerator {
    async fn generate(
        &self,
        application_id: ApplicationId,
        task_type: TaskType,
    ) -> GeneratorResult<GenerationOutcome> {
        let response = {
            let mut state = self.state.write().map_err(lock_error)?;
            state.calls.push((application_id, task_type));
            state.responses.get(&task_type).cloned()
        };

        match response {
            None => Ok(GenerationOutcome::success(format!(
                "{task_type} for application {application_id}"
            ))),
            Some(ScriptedResponse::Reply(outcome)) => Ok(outcome),
            Some(ScriptedResponse::Delayed(delay, outcome)) => {
                tokio::time::sleep(delay).await;
                Ok(outcome)
            }
            Some(ScriptedResponse::Unreachable(message)) => {
                Err(GeneratorError::transport(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    message,
                )))
            }
        }
    }
}

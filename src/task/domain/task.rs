//! Task aggregate root.

use super::{TaskCompletion, TaskDomainError, TaskId, TaskResult, TaskStatus, TaskType};
use crate::application::domain::ApplicationId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    application_id: ApplicationId,
    task_type: TaskType,
    status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<TaskResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning application.
    pub application_id: ApplicationId,
    /// Persisted artifact type.
    pub task_type: TaskType,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted result payload, if any.
    pub result: Option<TaskResult>,
    /// Persisted error detail, if any.
    pub error: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates a pending task for `application_id`.
    #[must_use]
    pub fn new(application_id: ApplicationId, task_type: TaskType, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            application_id,
            task_type,
            status: TaskStatus::Pending,
            result: None,
            error: None,
            created_at: clock.utc(),
            completed_at: None,
        }
    }

    /// Reconstructs a task from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InconsistentCompletion`] when the
    /// completion timestamp disagrees with the status, or
    /// [`TaskDomainError::InconsistentPayload`] when a result or error is
    /// present in a status that cannot hold it.
    pub fn from_persisted(data: PersistedTaskData) -> Result<Self, TaskDomainError> {
        if data.status.is_terminal() != data.completed_at.is_some() {
            return Err(TaskDomainError::InconsistentCompletion {
                task_id: data.id,
                status: data.status,
            });
        }
        let result_allowed = matches!(data.status, TaskStatus::Success | TaskStatus::Partial);
        let error_allowed = data.status == TaskStatus::Failed;
        if (data.result.is_some() && !result_allowed) || (data.error.is_some() && !error_allowed) {
            return Err(TaskDomainError::InconsistentPayload {
                task_id: data.id,
                status: data.status,
            });
        }

        Ok(Self {
            id: data.id,
            application_id: data.application_id,
            task_type: data.task_type,
            status: data.status,
            result: data.result,
            error: data.error,
            created_at: data.created_at,
            completed_at: data.completed_at,
        })
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning application.
    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    /// Returns the artifact type.
    #[must_use]
    pub const fn task_type(&self) -> TaskType {
        self.task_type
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the result payload, if any.
    #[must_use]
    pub const fn result(&self) -> Option<&TaskResult> {
        self.result.as_ref()
    }

    /// Returns the error detail, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, set once the task is terminal.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Marks the task as dispatched to the generator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task
    /// is pending.
    pub fn start(&mut self) -> Result<(), TaskDomainError> {
        self.ensure_transition(TaskStatus::Running)?;
        self.status = TaskStatus::Running;
        Ok(())
    }

    /// Moves a running task to the terminal status described by
    /// `completion` and stamps `completed_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStateTransition`] unless the task
    /// is running. The task is left untouched.
    pub fn complete(
        &mut self,
        completion: TaskCompletion,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        self.ensure_transition(completion.status())?;
        self.status = completion.status();
        match completion {
            TaskCompletion::Success(result) | TaskCompletion::Partial(result) => {
                self.result = result;
            }
            TaskCompletion::Failed(detail) => self.error = Some(detail),
        }
        self.completed_at = Some(clock.utc());
        Ok(())
    }

    fn ensure_transition(&self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status.can_transition_to(target) {
            Ok(())
        } else {
            Err(TaskDomainError::InvalidStateTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            })
        }
    }
}

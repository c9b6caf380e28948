//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating tasks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The requested status change is not permitted.
    #[error("invalid task state transition for {task_id}: {from} -> {to}")]
    InvalidStateTransition {
        /// Task identifier.
        task_id: TaskId,
        /// Current status.
        from: TaskStatus,
        /// Requested status.
        to: TaskStatus,
    },

    /// Persisted completion timestamp disagrees with the status.
    #[error("task {task_id} in status {status} has an inconsistent completion timestamp")]
    InconsistentCompletion {
        /// Task identifier.
        task_id: TaskId,
        /// Persisted status.
        status: TaskStatus,
    },

    /// Persisted result payload or error detail disagrees with the status.
    #[error("task {task_id} in status {status} carries a payload it cannot have")]
    InconsistentPayload {
        /// Task identifier.
        task_id: TaskId,
        /// Persisted status.
        status: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task types from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task type: {0}")]
pub struct ParseTaskTypeError(pub String);

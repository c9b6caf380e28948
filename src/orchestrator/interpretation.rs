//! Pure mapping from generator outcomes to state changes.

use crate::application::domain::ApplicationStatus;
use crate::audit::domain::AuditEventKind;
use crate::generation::domain::{GenerationOutcome, OutcomeKind};
use crate::task::domain::{TaskCompletion, TaskResult, TaskStatus};

/// Error detail stored when a failed outcome carries none.
const DEFAULT_FAILURE_DETAIL: &str = "generation failed";

/// State changes implied by one outcome kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpretation {
    /// Terminal status for the task.
    pub task_status: TaskStatus,
    /// New application status, or `None` to leave it unchanged.
    pub application_status: Option<ApplicationStatus>,
    /// Audit event to record.
    pub audit_kind: AuditEventKind,
}

/// Maps an outcome kind to the task status, application status change, and
/// audit event it produces.
///
/// | Outcome | Task | Application | Event |
/// |---|---|---|---|
/// | success | `Success` | unchanged | `AI_TASK_SUCCESS` |
/// | partial | `Partial` | `PartialActionRequired` | `AI_TASK_PARTIAL` |
/// | failure | `Failed` | `FailedNotSubmitted` | `AI_TASK_FAILED` |
#[must_use]
pub const fn interpret_outcome(kind: OutcomeKind) -> Interpretation {
    match kind {
        OutcomeKind::Success => Interpretation {
            task_status: TaskStatus::Success,
            application_status: None,
            audit_kind: AuditEventKind::AiTaskSuccess,
        },
        OutcomeKind::Partial => Interpretation {
            task_status: TaskStatus::Partial,
            application_status: Some(ApplicationStatus::PartialActionRequired),
            audit_kind: AuditEventKind::AiTaskPartial,
        },
        OutcomeKind::Failure => Interpretation {
            task_status: TaskStatus::Failed,
            application_status: Some(ApplicationStatus::FailedNotSubmitted),
            audit_kind: AuditEventKind::AiTaskFailed,
        },
    }
}

/// Converts a generator outcome into the task completion it records.
///
/// Content is kept only for success and partial outcomes, and the error
/// detail only for failures.
#[must_use]
pub fn completion_for(outcome: GenerationOutcome) -> TaskCompletion {
    match outcome.kind {
        OutcomeKind::Success => TaskCompletion::Success(outcome.content.map(TaskResult::from_content)),
        OutcomeKind::Partial => TaskCompletion::Partial(outcome.content.map(TaskResult::from_content)),
        OutcomeKind::Failure => TaskCompletion::Failed(
            outcome
                .error
                .filter(|detail| !detail.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_DETAIL.to_owned()),
        ),
    }
}

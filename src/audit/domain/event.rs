//! Audit event kinds and immutable event records.

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kind of fact recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditEventKind {
    /// A user authenticated successfully.
    AuthSuccess,
    /// An authentication attempt was rejected.
    AuthFailed,
    /// A new application was created in draft.
    ApplicationCreated,
    /// A draft application was marked ready for submission.
    ApplicationReady,
    /// A submission attempt found the application ineligible.
    SubmissionBlocked,
    /// The application was submitted.
    ApplicationSubmitted,
    /// An eligible application could not be submitted automatically.
    ApplicationNotSubmitted,
    /// A generation task completed successfully.
    AiTaskSuccess,
    /// A generation task completed with a partial result.
    AiTaskPartial,
    /// A generation task failed.
    AiTaskFailed,
    /// A match score was recorded on an application.
    MatchScoreRecorded,
    /// Application notes were replaced.
    ApplicationNotesUpdated,
}

impl AuditEventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::AuthSuccess,
        Self::AuthFailed,
        Self::ApplicationCreated,
        Self::ApplicationReady,
        Self::SubmissionBlocked,
        Self::ApplicationSubmitted,
        Self::ApplicationNotSubmitted,
        Self::AiTaskSuccess,
        Self::AiTaskPartial,
        Self::AiTaskFailed,
        Self::MatchScoreRecorded,
        Self::ApplicationNotesUpdated,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AuthSuccess => "AUTH_SUCCESS",
            Self::AuthFailed => "AUTH_FAILED",
            Self::ApplicationCreated => "APPLICATION_CREATED",
            Self::ApplicationReady => "APPLICATION_READY",
            Self::SubmissionBlocked => "SUBMISSION_BLOCKED",
            Self::ApplicationSubmitted => "APPLICATION_SUBMITTED",
            Self::ApplicationNotSubmitted => "APPLICATION_NOT_SUBMITTED",
            Self::AiTaskSuccess => "AI_TASK_SUCCESS",
            Self::AiTaskPartial => "AI_TASK_PARTIAL",
            Self::AiTaskFailed => "AI_TASK_FAILED",
            Self::MatchScoreRecorded => "MATCH_SCORE_RECORDED",
            Self::ApplicationNotesUpdated => "APPLICATION_NOTES_UPDATED",
        }
    }
}

impl fmt::Display for AuditEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for AuditEventKind {
    type Error = ParseAuditEventKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseAuditEventKindError(value.to_owned()))
    }
}

/// Error returned while parsing audit event kinds.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown audit event kind: {0}")]
pub struct ParseAuditEventKindError(pub String);

/// One immutable audit record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    kind: AuditEventKind,
    actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
    occurred_at: DateTime<Utc>,
}

impl AuditEvent {
    /// Creates an event stamped with the current clock time.
    #[must_use]
    pub fn new(kind: AuditEventKind, actor: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            kind,
            actor: actor.into(),
            detail: None,
            occurred_at: clock.utc(),
        }
    }

    /// Attaches free-form detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Returns the event kind.
    #[must_use]
    pub const fn kind(&self) -> AuditEventKind {
        self.kind
    }

    /// Returns the actor, normally the user's email.
    #[must_use]
    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Returns the detail, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Returns when the event occurred.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}

//! Error types for application domain validation and parsing.

use super::{ApplicationId, ApplicationStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating applications.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationDomainError {
    /// The match score is outside `0..=100`.
    #[error("match score {0} is out of range, expected 0 to 100")]
    MatchScoreOutOfRange(i64),

    /// The requested status change is not permitted.
    #[error("invalid application status transition for {application_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Application identifier.
        application_id: ApplicationId,
        /// Current status.
        from: ApplicationStatus,
        /// Requested status.
        to: ApplicationStatus,
    },

    /// Persisted data breaks the submission timestamp invariant.
    #[error("application {application_id} has status {status} but submitted_at is {submitted}")]
    InconsistentSubmission {
        /// Application identifier.
        application_id: ApplicationId,
        /// Persisted status.
        status: ApplicationStatus,
        /// Whether a submission timestamp was present.
        submitted: &'static str,
    },
}

/// Error returned while parsing application statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown application status: {0}")]
pub struct ParseApplicationStatusError(pub String);

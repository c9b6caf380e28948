//! Application aggregate root.

use super::{ApplicationDomainError, ApplicationId, ApplicationStatus, JobId, MatchScore};
use crate::identity::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Application aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    id: ApplicationId,
    user_id: UserId,
    job_id: JobId,
    status: ApplicationStatus,
    submitted_at: Option<DateTime<Utc>>,
    match_score: Option<MatchScore>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedApplicationData {
    /// Persisted application identifier.
    pub id: ApplicationId,
    /// Owning user.
    pub user_id: UserId,
    /// Target job.
    pub job_id: JobId,
    /// Persisted lifecycle status.
    pub status: ApplicationStatus,
    /// Persisted submission timestamp, if any.
    pub submitted_at: Option<DateTime<Utc>>,
    /// Persisted match score, if any.
    pub match_score: Option<MatchScore>,
    /// Persisted notes, if any.
    pub notes: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Application {
    /// Creates a draft application binding `user_id` to `job_id`.
    #[must_use]
    pub fn new(user_id: UserId, job_id: JobId, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: ApplicationId::new(),
            user_id,
            job_id,
            status: ApplicationStatus::Draft,
            submitted_at: None,
            match_score: None,
            notes: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an application from persisted storage.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::InconsistentSubmission`] when the
    /// stored submission timestamp disagrees with the stored status.
    pub fn from_persisted(data: PersistedApplicationData) -> Result<Self, ApplicationDomainError> {
        let is_submitted = data.status == ApplicationStatus::Submitted;
        if is_submitted != data.submitted_at.is_some() {
            return Err(ApplicationDomainError::InconsistentSubmission {
                application_id: data.id,
                status: data.status,
                submitted: if data.submitted_at.is_some() {
                    "set"
                } else {
                    "missing"
                },
            });
        }

        Ok(Self {
            id: data.id,
            user_id: data.user_id,
            job_id: data.job_id,
            status: data.status,
            submitted_at: data.submitted_at,
            match_score: data.match_score,
            notes: data.notes,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }

    /// Returns the application identifier.
    #[must_use]
    pub const fn id(&self) -> ApplicationId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the target job.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Returns when the application was submitted, if it currently is.
    #[must_use]
    pub const fn submitted_at(&self) -> Option<DateTime<Utc>> {
        self.submitted_at
    }

    /// Returns the match score, if recorded.
    #[must_use]
    pub const fn match_score(&self) -> Option<MatchScore> {
        self.match_score
    }

    /// Returns the free-text notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns whether a submission attempt may proceed.
    #[must_use]
    pub const fn is_ready_for_submission(&self) -> bool {
        self.status.is_eligible_for_submission()
    }

    /// Returns whether the application has not reached a terminal status.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Returns whether `user_id` owns this application.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Moves the application to `target`.
    ///
    /// Entering `Submitted` stamps `submitted_at`; leaving it clears the
    /// timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationDomainError::InvalidStatusTransition`] when the
    /// lifecycle forbids the move. The application is left untouched.
    pub fn transition_to(
        &mut self,
        target: ApplicationStatus,
        clock: &impl Clock,
    ) -> Result<(), ApplicationDomainError> {
        if !self.status.can_transition_to(target) {
            return Err(ApplicationDomainError::InvalidStatusTransition {
                application_id: self.id,
                from: self.status,
                to: target,
            });
        }

        let timestamp = clock.utc();
        self.status = target;
        self.submitted_at = (target == ApplicationStatus::Submitted).then_some(timestamp);
        self.updated_at = timestamp;
        Ok(())
    }

    /// Records a validated match score.
    pub fn set_match_score(&mut self, score: MatchScore, clock: &impl Clock) {
        self.match_score = Some(score);
        self.touch(clock);
    }

    /// Replaces the notes. Blank input clears them.
    pub fn set_notes(&mut self, notes: impl Into<String>, clock: &impl Clock) {
        let text = notes.into();
        self.notes = (!text.trim().is_empty()).then_some(text);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

//! Orchestration service coordinating applications, tasks, and collaborators.

use super::error::{OrchestratorError, OrchestratorResult};
use super::interpretation::{completion_for, interpret_outcome};
use super::locks::ApplicationLocks;
use crate::application::{
    domain::{Application, ApplicationId, ApplicationStatus, JobId, MatchScore},
    ports::ApplicationRepository,
};
use crate::audit::{
    domain::{AuditEvent, AuditEventKind},
    ports::AuditSink,
};
use crate::config::{ConfigError, OrchestratorConfig};
use crate::generation::{domain::GenerationOutcome, ports::ArtifactGenerator};
use crate::identity::{
    domain::{EmailAddress, User},
    ports::CredentialVerifier,
};
use crate::submission::{
    adapters::{MANUAL_SUBMISSION_REASON, ManualSubmission},
    ports::{SubmissionGateway, SubmissionReceipt},
};
use crate::task::{
    domain::{Task, TaskId, TaskType},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;
use tracing::{debug, info, warn};

/// Audit detail recorded when a submission is blocked by status.
pub const NOT_READY_REASON: &str = "Application not ready";

/// Detail recorded when the credential verifier itself fails.
const VERIFIER_UNAVAILABLE: &str = "credential verifier unavailable";

/// Collaborators required by [`Orchestrator`].
pub struct OrchestratorPorts<A, T, G, V> {
    /// Application store.
    pub applications: Arc<A>,
    /// Task store.
    pub tasks: Arc<T>,
    /// Artifact generator.
    pub generator: Arc<G>,
    /// Credential verifier.
    pub credentials: Arc<V>,
    /// Audit sink.
    pub audit: Arc<dyn AuditSink>,
}

/// Coordinates the application lifecycle and AI task execution.
///
/// Every mutating operation checks ownership first, persists its state
/// changes, and then records one audit event. Generator and submission
/// failures settle into application and task states; only validation and
/// storage failures reach the caller.
pub struct Orchestrator<A, T, G, V, C>
where
    A: ApplicationRepository,
    T: TaskRepository,
    G: ArtifactGenerator,
    V: CredentialVerifier,
    C: Clock + Send + Sync,
{
    applications: Arc<A>,
    tasks: Arc<T>,
    generator: Arc<G>,
    credentials: Arc<V>,
    audit: Arc<dyn AuditSink>,
    submission: Arc<dyn SubmissionGateway>,
    clock: Arc<C>,
    config: OrchestratorConfig,
    locks: ApplicationLocks,
}

impl<A, T, G, V, C> Clone for Orchestrator<A, T, G, V, C>
where
    A: ApplicationRepository,
    T: TaskRepository,
    G: ArtifactGenerator,
    V: CredentialVerifier,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            applications: Arc::clone(&self.applications),
            tasks: Arc::clone(&self.tasks),
            generator: Arc::clone(&self.generator),
            credentials: Arc::clone(&self.credentials),
            audit: Arc::clone(&self.audit),
            submission: Arc::clone(&self.submission),
            clock: Arc::clone(&self.clock),
            config: self.config,
            locks: self.locks.clone(),
        }
    }
}

impl<A, T, G, V, C> Orchestrator<A, T, G, V, C>
where
    A: ApplicationRepository,
    T: TaskRepository,
    G: ArtifactGenerator,
    V: CredentialVerifier,
    C: Clock + Send + Sync,
{
    /// Creates an orchestrator with manual submission and default settings.
    #[must_use]
    pub fn new(ports: OrchestratorPorts<A, T, G, V>, clock: Arc<C>) -> Self {
        Self {
            applications: ports.applications,
            tasks: ports.tasks,
            generator: ports.generator,
            credentials: ports.credentials,
            audit: ports.audit,
            submission: Arc::new(ManualSubmission),
            clock,
            config: OrchestratorConfig::default(),
            locks: ApplicationLocks::new(),
        }
    }

    /// Replaces the submission gateway.
    #[must_use]
    pub fn with_submission_gateway(mut self, gateway: Arc<dyn SubmissionGateway>) -> Self {
        self.submission = gateway;
        self
    }

    /// Replaces the runtime settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` fails
    /// [`OrchestratorConfig::validate`].
    pub fn with_config(mut self, config: OrchestratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Returns the active runtime settings.
    #[must_use]
    pub const fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Resolves a user from an email address and secret.
    ///
    /// Returns `Ok(None)` for unknown users, wrong secrets, and malformed
    /// addresses alike, recording `AUTH_FAILED` with the attempted address.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::Credentials`] when the verifier fails.
    pub async fn authenticate(&self, email: &str, secret: &str) -> OrchestratorResult<Option<User>> {
        let attempted = email.trim();
        let Ok(address) = EmailAddress::new(attempted) else {
            self.emit(AuditEventKind::AuthFailed, attempted, None).await;
            return Ok(None);
        };

        match self.credentials.verify(&address, secret).await {
            Ok(Some(user)) => {
                self.emit(AuditEventKind::AuthSuccess, user.email().as_str(), None)
                    .await;
                Ok(Some(user))
            }
            Ok(None) => {
                self.emit(AuditEventKind::AuthFailed, address.as_str(), None)
                    .await;
                Ok(None)
            }
            Err(err) => {
                warn!(error = %err, "credential verification failed");
                self.emit(
                    AuditEventKind::AuthFailed,
                    address.as_str(),
                    Some(VERIFIER_UNAVAILABLE.to_owned()),
                )
                .await;
                Err(err.into())
            }
        }
    }

    /// Creates a draft application for `user` and `job_id`.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::ApplicationStore`] when persistence fails.
    pub async fn create_application(
        &self,
        user: &User,
        job_id: JobId,
    ) -> OrchestratorResult<Application> {
        let application = Application::new(user.id(), job_id, &*self.clock);
        self.applications.save(&application).await?;
        info!(
            application_id = %application.id(),
            user_id = %user.id(),
            job_id = %job_id,
            "application created"
        );
        self.emit(
            AuditEventKind::ApplicationCreated,
            user.email().as_str(),
            Some(application.id().to_string()),
        )
        .await;
        Ok(application)
    }

    /// Runs one AI task for an application and settles its outcome.
    ///
    /// The task is persisted as pending, then running, and finally in its
    /// terminal status together with any application status change. Generator
    /// transport errors and timeouts are recorded as failed outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::ApplicationNotFound`] or
    /// [`OrchestratorError::NotOwner`] before any task exists, or a storage
    /// error when a write fails.
    pub async fn generate_artifact(
        &self,
        user: &User,
        application_id: ApplicationId,
        task_type: TaskType,
    ) -> OrchestratorResult<Task> {
        let _guard = self.serialize(application_id).await;
        self.find_owned_or_error(user, application_id).await?;

        let mut task = Task::new(application_id, task_type, &*self.clock);
        self.tasks.save(&task).await?;
        task.start()?;
        self.tasks.save(&task).await?;
        debug!(
            task_id = %task.id(),
            %application_id,
            task_type = task_type.as_str(),
            "task running"
        );

        let outcome = self.call_generator(application_id, task_type).await;
        let interpretation = interpret_outcome(outcome.kind);
        task.complete(completion_for(outcome), &*self.clock)?;
        // The terminal task is stored before any further read can fail.
        self.tasks.save(&task).await?;

        // Re-read so changes made while the generator ran are not lost.
        let mut application = self.find_owned_or_error(user, application_id).await?;
        if let Some(status) = interpretation.application_status {
            application.transition_to(status, &*self.clock)?;
            self.applications.save(&application).await?;
        }
        info!(
            task_id = %task.id(),
            %application_id,
            task_status = task.status().as_str(),
            application_status = application.status().as_str(),
            "task settled"
        );
        self.emit(
            interpretation.audit_kind,
            user.email().as_str(),
            Some(task.id().to_string()),
        )
        .await;
        Ok(task)
    }

    /// Attempts to submit an application.
    ///
    /// Applications outside `Draft` and `Ready` are moved to
    /// `PartialActionRequired` without contacting the gateway. Eligible
    /// applications end in `Submitted` when the gateway accepts and in
    /// `FailedNotSubmitted` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::ApplicationNotFound`] or
    /// [`OrchestratorError::NotOwner`] before any change, or
    /// [`OrchestratorError::ApplicationStore`] when persistence fails.
    pub async fn submit_application(
        &self,
        user: &User,
        application_id: ApplicationId,
    ) -> OrchestratorResult<Application> {
        let _guard = self.serialize(application_id).await;
        let mut application = self.find_owned_or_error(user, application_id).await?;

        if !application.is_ready_for_submission() {
            application.transition_to(ApplicationStatus::PartialActionRequired, &*self.clock)?;
            self.applications.save(&application).await?;
            info!(%application_id, "submission blocked; application not ready");
            self.emit(
                AuditEventKind::SubmissionBlocked,
                user.email().as_str(),
                Some(NOT_READY_REASON.to_owned()),
            )
            .await;
            return Ok(application);
        }

        let accepted = match self.submission.submit(&application).await {
            Ok(SubmissionReceipt::Submitted) => true,
            Ok(SubmissionReceipt::NotSubmitted(reason)) => {
                info!(%application_id, %reason, "submission declined");
                false
            }
            Err(err) => {
                warn!(%application_id, error = %err, "submission gateway failed");
                false
            }
        };

        let (status, kind, detail) = if accepted {
            (
                ApplicationStatus::Submitted,
                AuditEventKind::ApplicationSubmitted,
                application_id.to_string(),
            )
        } else {
            (
                ApplicationStatus::FailedNotSubmitted,
                AuditEventKind::ApplicationNotSubmitted,
                MANUAL_SUBMISSION_REASON.to_owned(),
            )
        };
        application.transition_to(status, &*self.clock)?;
        self.applications.save(&application).await?;
        self.emit(kind, user.email().as_str(), Some(detail)).await;
        Ok(application)
    }

    /// Moves a draft application to `Ready`.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::ApplicationDomain`] unless the
    /// application is a draft, ownership errors, or storage errors.
    pub async fn mark_ready(
        &self,
        user: &User,
        application_id: ApplicationId,
    ) -> OrchestratorResult<Application> {
        let _guard = self.serialize(application_id).await;
        let mut application = self.find_owned_or_error(user, application_id).await?;
        application.transition_to(ApplicationStatus::Ready, &*self.clock)?;
        self.applications.save(&application).await?;
        self.emit(
            AuditEventKind::ApplicationReady,
            user.email().as_str(),
            Some(application_id.to_string()),
        )
        .await;
        Ok(application)
    }

    /// Records a match score between 0 and 100.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::ApplicationDomain`] for out-of-range
    /// scores, ownership errors, or storage errors.
    pub async fn record_match_score(
        &self,
        user: &User,
        application_id: ApplicationId,
        score: i64,
    ) -> OrchestratorResult<Application> {
        let score = MatchScore::new(score)?;
        let _guard = self.serialize(application_id).await;
        let mut application = self.find_owned_or_error(user, application_id).await?;
        application.set_match_score(score, &*self.clock);
        self.applications.save(&application).await?;
        self.emit(
            AuditEventKind::MatchScoreRecorded,
            user.email().as_str(),
            Some(score.to_string()),
        )
        .await;
        Ok(application)
    }

    /// Replaces the free-form notes on an application.
    ///
    /// Blank notes clear the field.
    ///
    /// # Errors
    ///
    /// Returns ownership or storage errors.
    pub async fn update_notes(
        &self,
        user: &User,
        application_id: ApplicationId,
        notes: impl Into<String> + Send,
    ) -> OrchestratorResult<Application> {
        let _guard = self.serialize(application_id).await;
        let mut application = self.find_owned_or_error(user, application_id).await?;
        application.set_notes(notes, &*self.clock);
        self.applications.save(&application).await?;
        self.emit(
            AuditEventKind::ApplicationNotesUpdated,
            user.email().as_str(),
            Some(application_id.to_string()),
        )
        .await;
        Ok(application)
    }

    /// Lists the applications owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::ApplicationStore`] when the lookup fails.
    pub async fn list_applications(&self, user: &User) -> OrchestratorResult<Vec<Application>> {
        Ok(self.applications.find_by_user_id(user.id()).await?)
    }

    /// Finds an application owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::NotOwner`] when the application belongs
    /// to someone else, or a storage error.
    pub async fn find_application(
        &self,
        user: &User,
        application_id: ApplicationId,
    ) -> OrchestratorResult<Option<Application>> {
        let Some(application) = self.applications.find_by_id(application_id).await? else {
            return Ok(None);
        };
        Self::ensure_owner(user, &application)?;
        Ok(Some(application))
    }

    /// Finds a task whose application is owned by `user`.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::NotOwner`] when the task belongs to
    /// another user's application, or a storage error.
    pub async fn find_task(&self, user: &User, task_id: TaskId) -> OrchestratorResult<Option<Task>> {
        let Some(task) = self.tasks.find_by_id(task_id).await? else {
            return Ok(None);
        };
        self.find_owned_or_error(user, task.application_id()).await?;
        Ok(Some(task))
    }

    /// Lists the tasks recorded for an application, oldest first.
    ///
    /// # Errors
    ///
    /// Returns ownership or storage errors.
    pub async fn tasks_for_application(
        &self,
        user: &User,
        application_id: ApplicationId,
    ) -> OrchestratorResult<Vec<Task>> {
        self.find_owned_or_error(user, application_id).await?;
        Ok(self.tasks.find_by_application_id(application_id).await?)
    }

    async fn find_owned_or_error(
        &self,
        user: &User,
        application_id: ApplicationId,
    ) -> OrchestratorResult<Application> {
        let application = self
            .applications
            .find_by_id(application_id)
            .await?
            .ok_or(OrchestratorError::ApplicationNotFound(application_id))?;
        Self::ensure_owner(user, &application)?;
        Ok(application)
    }

    fn ensure_owner(user: &User, application: &Application) -> OrchestratorResult<()> {
        if application.is_owned_by(user.id()) {
            Ok(())
        } else {
            Err(OrchestratorError::NotOwner {
                application_id: application.id(),
                user_id: user.id(),
            })
        }
    }

    async fn serialize(&self, application_id: ApplicationId) -> Option<OwnedMutexGuard<()>> {
        if self.config.serialize_per_application {
            Some(self.locks.acquire(application_id).await)
        } else {
            None
        }
    }

    async fn call_generator(
        &self,
        application_id: ApplicationId,
        task_type: TaskType,
    ) -> GenerationOutcome {
        let timeout = self.config.generator_timeout();
        let call = self.generator.generate(application_id, task_type);
        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                warn!(
                    %application_id,
                    task_type = task_type.as_str(),
                    error = %err,
                    "artifact generator failed"
                );
                GenerationOutcome::failure(err.to_string())
            }
            Err(_) => {
                warn!(
                    %application_id,
                    task_type = task_type.as_str(),
                    timeout_ms = self.config.generator_timeout_ms,
                    "artifact generator timed out"
                );
                GenerationOutcome::failure(format!(
                    "artifact generator timed out after {} ms",
                    self.config.generator_timeout_ms
                ))
            }
        }
    }

    async fn emit(&self, kind: AuditEventKind, actor: &str, detail: Option<String>) {
        let event = AuditEvent::new(kind, actor, &*self.clock);
        let event = match detail {
            Some(detail) => event.with_detail(detail),
            None => event,
        };
        if let Err(err) = self.audit.record(&event).await {
            warn!(kind = kind.as_str(), error = %err, "audit sink rejected event");
        }
    }
}

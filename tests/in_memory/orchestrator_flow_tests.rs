//! In-memory integration tests for application creation and AI tasks.

use super::helpers::{Harness, harness};
use jobtrack::application::{
    domain::{ApplicationDomainError, ApplicationStatus, JobId},
    ports::ApplicationRepository,
};
use jobtrack::audit::domain::AuditEventKind;
use jobtrack::generation::{adapters::ScriptedResponse, domain::GenerationOutcome};
use jobtrack::orchestrator::OrchestratorError;
use jobtrack::task::domain::{TaskResult, TaskStatus, TaskType};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_application_is_a_draft_owned_by_the_user(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let job_id = JobId::new();

    let application = harness.orchestrator.create_application(&user, job_id).await?;

    assert_eq!(application.status(), ApplicationStatus::Draft);
    assert_eq!(application.user_id(), user.id());
    assert_eq!(application.job_id(), job_id);
    assert_eq!(application.submitted_at(), None);
    let stored = harness.applications.find_by_id(application.id()).await?;
    assert_eq!(stored, Some(application.clone()));

    let events = harness.events()?;
    let [created] = events.as_slice() else {
        eyre::bail!("expected one audit event, found {}", events.len());
    };
    assert_eq!(created.kind(), AuditEventKind::ApplicationCreated);
    assert_eq!(created.actor(), "ada@example.com");
    assert_eq!(created.detail(), Some(application.id().to_string().as_str()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn successful_generation_leaves_application_status_unchanged(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;
    harness.generator.script(
        TaskType::CoverLetter,
        ScriptedResponse::Reply(GenerationOutcome::success("Dear hiring manager")),
    )?;

    let task = harness
        .orchestrator
        .generate_artifact(&user, application.id(), TaskType::CoverLetter)
        .await?;

    assert_eq!(task.status(), TaskStatus::Success);
    assert_eq!(
        task.result(),
        Some(&TaskResult::Text("Dear hiring manager".to_owned()))
    );
    assert!(task.completed_at().is_some());
    let stored = harness
        .orchestrator
        .find_application(&user, application.id())
        .await?
        .ok_or_else(|| eyre::eyre!("application should exist"))?;
    assert_eq!(stored.status(), ApplicationStatus::Draft);

    assert_eq!(
        harness.event_kinds()?,
        vec![
            AuditEventKind::ApplicationCreated,
            AuditEventKind::AiTaskSuccess
        ]
    );
    let events = harness.events()?;
    let last = events.last().ok_or_else(|| eyre::eyre!("missing event"))?;
    assert_eq!(last.detail(), Some(task.id().to_string().as_str()));
    Ok(())
}

#[rstest]
#[case(
    GenerationOutcome::partial("Half a resume"),
    TaskStatus::Partial,
    ApplicationStatus::PartialActionRequired,
    AuditEventKind::AiTaskPartial
)]
#[case(
    GenerationOutcome::failure("model overloaded"),
    TaskStatus::Failed,
    ApplicationStatus::FailedNotSubmitted,
    AuditEventKind::AiTaskFailed
)]
#[tokio::test(flavor = "multi_thread")]
async fn degraded_generation_moves_the_application(
    harness: Harness,
    #[case] outcome: GenerationOutcome,
    #[case] task_status: TaskStatus,
    #[case] application_status: ApplicationStatus,
    #[case] event: AuditEventKind,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;
    harness
        .generator
        .script(TaskType::Resume, ScriptedResponse::Reply(outcome))?;

    let task = harness
        .orchestrator
        .generate_artifact(&user, application.id(), TaskType::Resume)
        .await?;

    assert_eq!(task.status(), task_status);
    let stored = harness
        .applications
        .find_by_id(application.id())
        .await?
        .ok_or_else(|| eyre::eyre!("application should exist"))?;
    assert_eq!(stored.status(), application_status);
    assert_eq!(
        harness.event_kinds()?,
        vec![AuditEventKind::ApplicationCreated, event]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fit_score_json_is_stored_as_structured_result(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;
    harness.generator.script(
        TaskType::FitScore,
        ScriptedResponse::Reply(GenerationOutcome::success(
            r#"{"score": 87, "gaps": ["kubernetes"]}"#,
        )),
    )?;

    let task = harness
        .orchestrator
        .generate_artifact(&user, application.id(), TaskType::FitScore)
        .await?;

    assert_eq!(
        task.result(),
        Some(&TaskResult::Structured(
            json!({ "score": 87, "gaps": ["kubernetes"] })
        ))
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_history_is_listed_in_creation_order(harness: Harness) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;

    let mut created = Vec::new();
    for task_type in TaskType::ALL {
        let task = harness
            .orchestrator
            .generate_artifact(&user, application.id(), task_type)
            .await?;
        created.push(task.id());
    }

    let history = harness
        .orchestrator
        .tasks_for_application(&user, application.id())
        .await?;
    let ids: Vec<_> = history.iter().map(|task| task.id()).collect();
    assert_eq!(ids, created);
    assert!(history.iter().all(|task| task.status().is_terminal()));
    assert!(history.iter().all(|task| task.completed_at().is_some()));

    let first = created
        .first()
        .copied()
        .ok_or_else(|| eyre::eyre!("no tasks created"))?;
    let found = harness.orchestrator.find_task(&user, first).await?;
    assert_eq!(found.map(|task| task.task_type()), Some(TaskType::CoverLetter));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn other_users_cannot_read_or_modify_an_application(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let owner = harness.register("ada@example.com")?;
    let intruder = harness.register("eve@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&owner, JobId::new())
        .await?;

    let read = harness
        .orchestrator
        .find_application(&intruder, application.id())
        .await;
    let notes = harness
        .orchestrator
        .update_notes(&intruder, application.id(), "mine now")
        .await;

    assert!(matches!(read, Err(OrchestratorError::NotOwner { .. })));
    assert!(matches!(notes, Err(OrchestratorError::NotOwner { .. })));
    assert!(
        harness
            .orchestrator
            .list_applications(&intruder)
            .await?
            .is_empty()
    );
    let stored = harness
        .applications
        .find_by_id(application.id())
        .await?
        .ok_or_else(|| eyre::eyre!("application should exist"))?;
    assert_eq!(stored.notes(), None);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_application_is_reported_as_not_found(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let missing = jobtrack::application::domain::ApplicationId::new();

    let result = harness
        .orchestrator
        .generate_artifact(&user, missing, TaskType::Resume)
        .await;

    assert!(matches!(
        result,
        Err(OrchestratorError::ApplicationNotFound(id)) if id == missing
    ));
    assert!(harness.generator.calls()?.is_empty());
    assert!(harness.events()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn mark_ready_only_applies_to_drafts(harness: Harness) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;

    let ready = harness
        .orchestrator
        .mark_ready(&user, application.id())
        .await?;
    let again = harness
        .orchestrator
        .mark_ready(&user, application.id())
        .await;

    assert_eq!(ready.status(), ApplicationStatus::Ready);
    assert!(matches!(
        again,
        Err(OrchestratorError::ApplicationDomain(
            ApplicationDomainError::InvalidStatusTransition { .. }
        ))
    ));
    assert_eq!(
        harness.event_kinds()?,
        vec![
            AuditEventKind::ApplicationCreated,
            AuditEventKind::ApplicationReady
        ]
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn match_score_outside_range_is_rejected_without_side_effects(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;

    let rejected = harness
        .orchestrator
        .record_match_score(&user, application.id(), 101)
        .await;
    let recorded = harness
        .orchestrator
        .record_match_score(&user, application.id(), 87)
        .await?;

    assert!(matches!(
        rejected,
        Err(OrchestratorError::ApplicationDomain(
            ApplicationDomainError::MatchScoreOutOfRange(101)
        ))
    ));
    assert_eq!(recorded.match_score().map(|score| score.value()), Some(87));
    let score_events = harness
        .audit
        .events_of_kind(AuditEventKind::MatchScoreRecorded)?;
    let [event] = score_events.as_slice() else {
        eyre::bail!("expected one score event, found {}", score_events.len());
    };
    assert_eq!(event.detail(), Some("87"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_notes_clear_the_field(harness: Harness) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;

    let noted = harness
        .orchestrator
        .update_notes(&user, application.id(), "Referral from Grace")
        .await?;
    let cleared = harness
        .orchestrator
        .update_notes(&user, application.id(), "  ")
        .await?;

    assert_eq!(noted.notes(), Some("Referral from Grace"));
    assert_eq!(cleared.notes(), None);
    assert_eq!(
        harness
            .audit
            .events_of_kind(AuditEventKind::ApplicationNotesUpdated)?
            .len(),
        2
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_applications_returns_only_the_users_own(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let ada = harness.register("ada@example.com")?;
    let grace = harness.register("grace@example.com")?;
    let first = harness.orchestrator.create_application(&ada, JobId::new()).await?;
    let second = harness.orchestrator.create_application(&ada, JobId::new()).await?;
    harness.orchestrator.create_application(&grace, JobId::new()).await?;

    let listed = harness.orchestrator.list_applications(&ada).await?;

    let ids: Vec<_> = listed.iter().map(|application| application.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    Ok(())
}

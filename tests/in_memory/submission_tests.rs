//! In-memory integration tests for application submission.

use super::helpers::{Harness, harness};
use jobtrack::application::domain::{Application, ApplicationStatus, JobId};
use jobtrack::audit::domain::AuditEventKind;
use jobtrack::generation::{adapters::ScriptedResponse, domain::GenerationOutcome};
use jobtrack::identity::domain::User;
use jobtrack::orchestrator::NOT_READY_REASON;
use jobtrack::submission::adapters::{MANUAL_SUBMISSION_REASON, ScriptedSubmissionGateway};
use jobtrack::task::domain::TaskType;
use rstest::rstest;
use std::sync::Arc;

async fn ready_application(harness: &Harness, user: &User) -> Result<Application, eyre::Report> {
    let application = harness
        .orchestrator
        .create_application(user, JobId::new())
        .await?;
    Ok(harness
        .orchestrator
        .mark_ready(user, application.id())
        .await?)
}

fn single_detail(harness: &Harness, kind: AuditEventKind) -> Result<String, eyre::Report> {
    let events = harness.audit.events_of_kind(kind)?;
    let [event] = events.as_slice() else {
        eyre::bail!("expected one {kind} event, found {}", events.len());
    };
    event
        .detail()
        .map(str::to_owned)
        .ok_or_else(|| eyre::eyre!("{kind} event has no detail"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn manual_submission_leaves_application_not_submitted(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = ready_application(&harness, &user).await?;

    let outcome = harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    assert_eq!(outcome.status(), ApplicationStatus::FailedNotSubmitted);
    assert_eq!(outcome.submitted_at(), None);
    assert_eq!(
        single_detail(&harness, AuditEventKind::ApplicationNotSubmitted)?,
        MANUAL_SUBMISSION_REASON
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_submission_stamps_submitted_at(harness: Harness) -> Result<(), eyre::Report> {
    let gateway = Arc::new(ScriptedSubmissionGateway::accepting());
    let harness = harness.with_gateway(gateway.clone());
    let user = harness.register("ada@example.com")?;
    let application = ready_application(&harness, &user).await?;

    let submitted = harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    assert_eq!(submitted.status(), ApplicationStatus::Submitted);
    assert!(submitted.submitted_at().is_some());
    assert_eq!(gateway.attempts()?, vec![application.id()]);
    assert_eq!(
        single_detail(&harness, AuditEventKind::ApplicationSubmitted)?,
        application.id().to_string()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drafts_are_eligible_for_submission(harness: Harness) -> Result<(), eyre::Report> {
    let harness = harness.with_gateway(Arc::new(ScriptedSubmissionGateway::accepting()));
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;

    let submitted = harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    assert_eq!(submitted.status(), ApplicationStatus::Submitted);
    Ok(())
}

#[rstest]
#[case(ScriptedSubmissionGateway::declining("Portal requires a captcha"))]
#[case(ScriptedSubmissionGateway::unreachable())]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_or_failed_gateway_leaves_application_not_submitted(
    harness: Harness,
    #[case] gateway: ScriptedSubmissionGateway,
) -> Result<(), eyre::Report> {
    let harness = harness.with_gateway(Arc::new(gateway));
    let user = harness.register("ada@example.com")?;
    let application = ready_application(&harness, &user).await?;

    let outcome = harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    assert_eq!(outcome.status(), ApplicationStatus::FailedNotSubmitted);
    assert_eq!(
        single_detail(&harness, AuditEventKind::ApplicationNotSubmitted)?,
        MANUAL_SUBMISSION_REASON
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ineligible_application_is_blocked_without_contacting_gateway(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let gateway = Arc::new(ScriptedSubmissionGateway::accepting());
    let harness = harness.with_gateway(gateway.clone());
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;
    harness.generator.script(
        TaskType::Resume,
        ScriptedResponse::Reply(GenerationOutcome::failure("model overloaded")),
    )?;
    harness
        .orchestrator
        .generate_artifact(&user, application.id(), TaskType::Resume)
        .await?;

    let blocked = harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    assert_eq!(blocked.status(), ApplicationStatus::PartialActionRequired);
    assert!(gateway.attempts()?.is_empty());
    assert_eq!(
        single_detail(&harness, AuditEventKind::SubmissionBlocked)?,
        NOT_READY_REASON
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn resubmitting_a_submitted_application_is_blocked(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let gateway = Arc::new(ScriptedSubmissionGateway::accepting());
    let harness = harness.with_gateway(gateway.clone());
    let user = harness.register("ada@example.com")?;
    let application = ready_application(&harness, &user).await?;
    harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    let second = harness
        .orchestrator
        .submit_application(&user, application.id())
        .await?;

    assert_eq!(second.status(), ApplicationStatus::PartialActionRequired);
    assert_eq!(second.submitted_at(), None);
    assert_eq!(gateway.attempts()?.len(), 1);
    assert_eq!(
        harness
            .audit
            .events_of_kind(AuditEventKind::ApplicationSubmitted)?
            .len(),
        1
    );
    Ok(())
}

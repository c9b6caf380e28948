//! In-memory integration tests for concurrent orchestration.

use super::helpers::{Harness, harness};
use jobtrack::application::{
    domain::{ApplicationId, ApplicationStatus, JobId},
    ports::ApplicationRepository,
};
use jobtrack::audit::domain::AuditEventKind;
use jobtrack::config::OrchestratorConfig;
use jobtrack::generation::{adapters::ScriptedResponse, domain::GenerationOutcome};
use jobtrack::identity::domain::User;
use jobtrack::task::domain::{TaskStatus, TaskType};
use rstest::rstest;
use std::sync::Arc;
use std::time::{Duration, Instant};

const GENERATION_DELAY: Duration = Duration::from_millis(100);

async fn run_all_task_types(
    harness: Harness,
) -> Result<(Harness, User, ApplicationId), eyre::Report> {
    let user = harness.register("ada@example.com")?;
    let application = harness
        .orchestrator
        .create_application(&user, JobId::new())
        .await?;
    for task_type in TaskType::ALL {
        harness.generator.script(
            task_type,
            ScriptedResponse::Delayed(GENERATION_DELAY, GenerationOutcome::success("done")),
        )?;
    }

    let harness = Arc::new(harness);
    let mut handles = Vec::new();
    for task_type in TaskType::ALL {
        let harness = Arc::clone(&harness);
        let user = user.clone();
        let application_id = application.id();
        handles.push(tokio::spawn(async move {
            harness
                .orchestrator
                .generate_artifact(&user, application_id, task_type)
                .await
        }));
    }
    for handle in handles {
        let task = handle.await??;
        assert_eq!(task.status(), TaskStatus::Success);
    }

    let harness = Arc::try_unwrap(harness)
        .map_err(|_| eyre::eyre!("harness still shared after all tasks finished"))?;
    Ok((harness, user, application.id()))
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_tasks_each_settle_once(harness: Harness) -> Result<(), eyre::Report> {
    let (harness, user, application_id) = run_all_task_types(harness).await?;

    let tasks = harness
        .orchestrator
        .tasks_for_application(&user, application_id)
        .await?;
    assert_eq!(tasks.len(), TaskType::ALL.len());
    assert!(tasks.iter().all(|task| task.status() == TaskStatus::Success));
    let successes = harness
        .audit
        .events_of_kind(AuditEventKind::AiTaskSuccess)?;
    assert_eq!(successes.len(), TaskType::ALL.len());
    let stored = harness
        .applications
        .find_by_id(application_id)
        .await?
        .ok_or_else(|| eyre::eyre!("application should exist"))?;
    assert_eq!(stored.status(), ApplicationStatus::Draft);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn serialized_mode_runs_one_operation_per_application_at_a_time(
    harness: Harness,
) -> Result<(), eyre::Report> {
    let harness =
        harness.with_config(OrchestratorConfig::default().with_serialize_per_application(true))?;
    let started = Instant::now();

    let (harness, _, _) = run_all_task_types(harness).await?;

    let expected = GENERATION_DELAY * u32::try_from(TaskType::ALL.len())?;
    assert!(
        started.elapsed() >= expected,
        "serialized generations finished in {:?}, expected at least {expected:?}",
        started.elapsed()
    );
    assert_eq!(
        harness
            .audit
            .events_of_kind(AuditEventKind::AiTaskSuccess)?
            .len(),
        TaskType::ALL.len()
    );
    Ok(())
}

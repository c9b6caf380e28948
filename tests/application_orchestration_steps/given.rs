//! Given steps for application orchestration BDD scenarios.

use super::world::{OrchestrationWorld, USER_SECRET, run_async};
use eyre::WrapErr;
use jobtrack::application::domain::JobId;
use jobtrack::generation::{adapters::ScriptedResponse, domain::GenerationOutcome};
use jobtrack::identity::domain::{EmailAddress, User};
use jobtrack::task::domain::TaskType;
use rstest_bdd_macros::given;

fn parse_task_type(raw: &str) -> Result<TaskType, eyre::Report> {
    TaskType::try_from(raw).map_err(|err| eyre::eyre!("invalid task type in scenario: {err}"))
}

#[given(r#"a registered user "{email}""#)]
fn registered_user(world: &mut OrchestrationWorld, email: String) -> Result<(), eyre::Report> {
    let user = User::new(EmailAddress::new(email)?);
    world
        .credentials
        .register(user.clone(), USER_SECRET)
        .wrap_err("register scenario user")?;
    world.user = Some(user);
    Ok(())
}

fn create_draft(world: &mut OrchestrationWorld) -> Result<(), eyre::Report> {
    let user = world.user()?.clone();
    let application = run_async(world.orchestrator.create_application(&user, JobId::new()))
        .wrap_err("create draft application")?;
    world.application = Some(application);
    Ok(())
}

#[given("a draft application")]
fn draft_application(world: &mut OrchestrationWorld) -> Result<(), eyre::Report> {
    create_draft(world)
}

#[given("a ready application")]
fn ready_application(world: &mut OrchestrationWorld) -> Result<(), eyre::Report> {
    create_draft(world)?;
    let user = world.user()?.clone();
    let application_id = world.application_id()?;
    let ready = run_async(world.orchestrator.mark_ready(&user, application_id))
        .wrap_err("mark application ready")?;
    world.application = Some(ready);
    Ok(())
}

#[given(r#"the generator is unreachable for "{task_type}""#)]
fn generator_unreachable(
    world: &mut OrchestrationWorld,
    task_type: String,
) -> Result<(), eyre::Report> {
    world.generator.script(
        parse_task_type(&task_type)?,
        ScriptedResponse::Unreachable("connection refused".to_owned()),
    )?;
    Ok(())
}

#[given(r#"the generator replies "{outcome}" for "{task_type}""#)]
fn generator_replies(
    world: &mut OrchestrationWorld,
    outcome: String,
    task_type: String,
) -> Result<(), eyre::Report> {
    let reply = match outcome.as_str() {
        "SUCCESS" => GenerationOutcome::success("generated artifact"),
        "PARTIAL" => GenerationOutcome::partial("incomplete artifact"),
        "FAILURE" => GenerationOutcome::failure("generation refused"),
        other => eyre::bail!("unknown generator outcome in scenario: {other}"),
    };
    world
        .generator
        .script(parse_task_type(&task_type)?, ScriptedResponse::Reply(reply))?;
    Ok(())
}

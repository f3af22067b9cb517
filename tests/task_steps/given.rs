//! Given steps for task submission BDD scenarios.

use super::world::{TaskWorld, run_async};
use courier::session::RecordStatus;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"the webhook replies with response "{response}""#)]
fn webhook_replies(world: &mut TaskWorld, response: String) {
    world.webhook.push_reply(json!({ "response": response }));
}

#[given(r#"the webhook fails with status {code:u64} reporting "{message}""#)]
fn webhook_fails(world: &mut TaskWorld, code: u64, message: String) -> Result<(), eyre::Report> {
    let status = u16::try_from(code)?;
    let body = json!({ "message": message }).to_string();
    world.webhook.push_status(status, &body);
    Ok(())
}

#[given(r#"a task "{content}" that failed to reach the webhook"#)]
fn task_that_failed(world: &mut TaskWorld, content: String) -> Result<(), eyre::Report> {
    let outcome = run_async(world.service.submit(&content));
    if outcome.is_rejected() {
        return Err(eyre::eyre!("task submission was rejected: {outcome:?}"));
    }
    let task = world.newest_task()?;
    if task.status() != RecordStatus::Pending {
        return Err(eyre::eyre!("expected pending task, found {}", task.status()));
    }
    world.last_outcome = Some(outcome);
    Ok(())
}

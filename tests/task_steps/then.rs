//! Then steps for task submission BDD scenarios.

use super::world::TaskWorld;
use courier::session::RecordStatus;
use rstest_bdd_macros::then;

#[then(r#"the newest task is completed with response "{response}""#)]
fn newest_task_completed(world: &TaskWorld, response: String) -> Result<(), eyre::Report> {
    let task = world.newest_task()?;
    if task.status() != RecordStatus::Completed {
        return Err(eyre::eyre!("expected completed task, found {}", task.status()));
    }
    if task.response() != Some(response.as_str()) {
        return Err(eyre::eyre!(
            "expected response {response:?}, found {:?}",
            task.response()
        ));
    }
    Ok(())
}

#[then("the newest task is pending without a response")]
fn newest_task_pending(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = world.newest_task()?;
    if task.status() != RecordStatus::Pending || task.response().is_some() {
        return Err(eyre::eyre!("expected a bare pending task, found {task:?}"));
    }
    Ok(())
}

#[then(r#"an error notification reads "{description}""#)]
fn error_notification(world: &TaskWorld, description: String) -> Result<(), eyre::Report> {
    let notification = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification emitted"))?;
    if !notification.is_destructive() || notification.description() != description {
        return Err(eyre::eyre!("unexpected notification {notification:?}"));
    }
    Ok(())
}

#[then("the session holds {count:u64} task")]
fn session_holds_tasks(world: &TaskWorld, count: u64) -> Result<(), eyre::Report> {
    let held = u64::try_from(world.service.tasks().len())?;
    if held != count {
        return Err(eyre::eyre!("expected {count} tasks, found {held}"));
    }
    Ok(())
}

#[then(r#"the tasks are listed as "{first}" then "{second}""#)]
fn tasks_listed(world: &TaskWorld, first: String, second: String) -> Result<(), eyre::Report> {
    let contents: Vec<String> = world
        .service
        .tasks()
        .iter()
        .map(|task| task.content().to_owned())
        .collect();
    if contents != [first.clone(), second.clone()] {
        return Err(eyre::eyre!(
            "expected [{first:?}, {second:?}], found {contents:?}"
        ));
    }
    Ok(())
}

//! When steps for task submission BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the task "{content}" is submitted"#)]
fn task_submitted(world: &mut TaskWorld, content: String) {
    world.last_outcome = Some(run_async(world.service.submit(&content)));
}

#[when("the newest task is resubmitted")]
fn newest_task_resubmitted(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let id = world.newest_task()?.id();
    world.last_resubmit = Some(run_async(world.service.resubmit(id)));
    Ok(())
}

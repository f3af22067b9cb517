//! When steps for chat session BDD scenarios.

use super::world::{ChatWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the user sends "{text}""#)]
fn user_sends(world: &mut ChatWorld, text: String) {
    world.last_outcome = Some(run_async(world.service.submit(&text)));
}

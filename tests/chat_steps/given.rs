//! Given steps for chat session BDD scenarios.

use super::world::ChatWorld;
use rstest_bdd_macros::given;
use serde_json::json;

#[given(r#"the webhook replies with response "{response}""#)]
fn webhook_replies(world: &mut ChatWorld, response: String) {
    world.webhook.push_reply(json!({ "response": response }));
}

#[given(r#"the webhook fails with status {code:u64} reporting "{message}""#)]
fn webhook_fails(world: &mut ChatWorld, code: u64, message: String) -> Result<(), eyre::Report> {
    let status = u16::try_from(code)?;
    let body = json!({ "message": message }).to_string();
    world.webhook.push_status(status, &body);
    Ok(())
}

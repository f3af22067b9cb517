//! Unit tests for the scripted in-memory webhook client.

use crate::session::SessionId;
use crate::webhook::{
    adapters::memory::ScriptedWebhookClient,
    domain::WebhookRequest,
    ports::{WebhookClient, WebhookError},
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn client() -> ScriptedWebhookClient {
    ScriptedWebhookClient::new()
}

fn request(text: &str) -> WebhookRequest {
    WebhookRequest::new(text, SessionId::new("session-42"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replays_outcomes_in_order(client: ScriptedWebhookClient) {
    client.push_reply(json!({"response": "first"}));
    client.push_status(500, "boom");

    let first = client.post(&request("one")).await.expect("first reply");
    let second = client.post(&request("two")).await;

    assert_eq!(first.text(), Some("first"));
    assert!(matches!(
        second,
        Err(WebhookError::Status { status: 500, ref detail }) if detail == "boom"
    ));
    assert_eq!(client.remaining(), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn records_every_request(client: ScriptedWebhookClient) {
    client.push_reply(json!({}));

    let recorded = client.post(&request("recorded")).await;
    let unscripted = client.post(&request("unscripted")).await;

    assert!(recorded.is_ok());
    assert!(unscripted.is_err());

    let messages: Vec<String> = client
        .requests()
        .iter()
        .map(|sent| sent.message().to_owned())
        .collect();
    assert_eq!(messages, vec!["recorded".to_owned(), "unscripted".to_owned()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fails_with_transport_error_when_nothing_is_queued(client: ScriptedWebhookClient) {
    let result = client.post(&request("hello")).await;
    assert!(matches!(result, Err(WebhookError::Transport(_))));
}

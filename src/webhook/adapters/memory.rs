//! Scripted in-memory webhook client.

use crate::webhook::{
    domain::{WebhookReply, WebhookRequest},
    ports::{WebhookClient, WebhookError, WebhookResult},
};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Webhook client that replays queued outcomes in order and records every
/// request it receives.
///
/// A call with no queued outcome fails with a transport error.
#[derive(Debug, Default)]
pub struct ScriptedWebhookClient {
    state: Mutex<ScriptedState>,
}

#[derive(Debug, Default)]
struct ScriptedState {
    outcomes: VecDeque<WebhookResult<WebhookReply>>,
    requests: Vec<WebhookRequest>,
}

impl ScriptedWebhookClient {
    /// Creates a client with no queued outcomes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply with the given JSON body.
    ///
    /// A `null` body is queued as a malformed-body failure, as the HTTP
    /// client reports it.
    pub fn push_reply(&self, body: Value) {
        self.push(WebhookReply::try_from_value(body).map_err(WebhookError::malformed_body));
    }

    /// Queues a non-success response with the given raw body.
    pub fn push_status(&self, status: u16, body: &str) {
        self.push(Err(WebhookError::from_status_body(status, body)));
    }

    /// Queues an arbitrary failure.
    pub fn push_error(&self, err: WebhookError) {
        self.push(Err(err));
    }

    /// Returns every request received so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> Vec<WebhookRequest> {
        self.lock().requests.clone()
    }

    /// Returns the number of queued outcomes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lock().outcomes.len()
    }

    fn push(&self, outcome: WebhookResult<WebhookReply>) {
        self.lock().outcomes.push_back(outcome);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WebhookClient for ScriptedWebhookClient {
    async fn post(&self, request: &WebhookRequest) -> WebhookResult<WebhookReply> {
        let mut state = self.lock();
        state.requests.push(request.clone());
        state.outcomes.pop_front().unwrap_or_else(|| {
            Err(WebhookError::transport(std::io::Error::other(
                "no scripted webhook outcome queued",
            )))
        })
    }
}

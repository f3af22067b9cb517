//! `reqwest`-backed webhook client.

use crate::config::CourierConfig;
use crate::webhook::{
    domain::{WebhookReply, WebhookRequest},
    ports::{WebhookClient, WebhookError, WebhookResult},
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

/// Webhook client posting JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpWebhookClient {
    http: Client,
    url: String,
}

impl HttpWebhookClient {
    /// Builds a client for the configured webhook endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] when the HTTP client cannot be
    /// initialised (for example when no TLS backend is available).
    pub fn new(config: &CourierConfig) -> WebhookResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(WebhookError::transport)?;
        Ok(Self {
            http,
            url: config.webhook_url().to_owned(),
        })
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn post(&self, request: &WebhookRequest) -> WebhookResult<WebhookReply> {
        debug!(
            url = %self.url,
            session_id = %request.session_id(),
            task_id = request.task_id(),
            "posting submission to webhook"
        );

        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(WebhookError::transport)?;

        let status = response.status();
        let body = response.text().await.map_err(WebhookError::transport)?;

        if !status.is_success() {
            let err = WebhookError::from_status_body(status.as_u16(), &body);
            warn!(status = status.as_u16(), detail = %err.detail(), "webhook error response");
            return Err(err);
        }

        WebhookReply::from_json(&body).map_err(WebhookError::malformed_body)
    }
}

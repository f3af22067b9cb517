//! Client port for posting submissions to the webhook.

use crate::webhook::domain::{
    FailureDiagnosis, WebhookReply, WebhookRequest, status_failure_detail,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for webhook client operations.
pub type WebhookResult<T> = Result<T, WebhookError>;

/// Webhook delivery contract.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Posts one request and returns the parsed reply.
    ///
    /// Exactly one outbound call is made per invocation; implementations do
    /// not retry.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Transport`] when the call cannot complete,
    /// [`WebhookError::Status`] for non-success responses and
    /// [`WebhookError::MalformedBody`] when a success body is not JSON or is `null`.
    async fn post(&self, request: &WebhookRequest) -> WebhookResult<WebhookReply>;
}

/// Errors returned by webhook client implementations.
#[derive(Debug, Clone, Error)]
pub enum WebhookError {
    /// The request could not be sent or the response could not be read.
    #[error("webhook transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The webhook answered with a non-success status.
    #[error("webhook returned HTTP {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Failure detail extracted from the response body.
        detail: String,
    },

    /// The webhook answered with a success status but a non-JSON body.
    #[error("webhook reply is not valid JSON: {0}")]
    MalformedBody(Arc<dyn std::error::Error + Send + Sync>),
}

impl WebhookError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a body parsing error.
    pub fn malformed_body(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::MalformedBody(Arc::new(err))
    }

    /// Builds a status error from the raw response body.
    #[must_use]
    pub fn from_status_body(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            detail: status_failure_detail(status, body),
        }
    }

    /// Returns the free-text detail used for failure classification.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Transport(err) | Self::MalformedBody(err) => err.to_string(),
            Self::Status { detail, .. } => detail.clone(),
        }
    }

    /// Classifies this failure by its detail text.
    #[must_use]
    pub fn diagnosis(&self) -> FailureDiagnosis {
        FailureDiagnosis::classify(&self.detail())
    }
}

//! JSON body posted to the webhook.

use crate::session::SessionId;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Request body sent to the webhook.
///
/// Serializes as `{"message", "sessionId", "taskId"?, "timestamp"?}`. The
/// optional fields are omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    message: String,
    session_id: SessionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_timestamp"
    )]
    timestamp: Option<DateTime<Utc>>,
}

impl WebhookRequest {
    /// Creates a request carrying the submitted text for a session.
    #[must_use]
    pub fn new(message: impl Into<String>, session_id: SessionId) -> Self {
        Self {
            message: message.into(),
            session_id,
            task_id: None,
            timestamp: None,
        }
    }

    /// Sets the task identifier the request belongs to.
    #[must_use]
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Sets the creation time of the submitted record.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Returns the submitted text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the task identifier, if any.
    #[must_use]
    pub fn task_id(&self) -> Option<&str> {
        self.task_id.as_deref()
    }

    /// Returns the record creation time, if any.
    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

/// Writes timestamps as ISO-8601 with millisecond precision and a `Z`
/// suffix, e.g. `2025-01-31T09:30:00.000Z`.
fn serialize_timestamp<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => {
            serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        None => serializer.serialize_none(),
    }
}

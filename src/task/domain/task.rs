//! Task record and its lifecycle.

use super::TaskId;
use crate::session::{Record, RecordStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A submitted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    content: String,
    status: RecordStatus,
    timestamp: DateTime<Utc>,
    response: Option<String>,
}

impl Task {
    /// Creates a pending task for the submitted text.
    #[must_use]
    pub fn new(content: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            content: content.into(),
            status: RecordStatus::Pending,
            timestamp: clock.utc(),
            response: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the submitted text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RecordStatus {
        self.status
    }

    /// Returns the submission timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the webhook response, once completed.
    #[must_use]
    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }
}

impl Record for Task {
    type Id = TaskId;

    fn record_id(&self) -> TaskId {
        self.id
    }

    fn record_status(&self) -> RecordStatus {
        self.status
    }

    /// Content, when given, becomes the response. Without content the
    /// response is cleared; the submitted text never changes.
    fn with_status(&self, status: RecordStatus, content: Option<&str>) -> Self {
        Self {
            status,
            response: content.map(ToOwned::to_owned),
            ..self.clone()
        }
    }
}

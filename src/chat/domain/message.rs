//! Chat message record.

use super::{MessageId, ParseMessageKindError};
use crate::session::{Record, RecordStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Content shown on an assistant message while its reply is pending.
pub const PROCESSING_PLACEHOLDER: &str = "Processing your request...";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Text entered by the user.
    User,
    /// Reply produced through the webhook.
    Assistant,
}

impl MessageKind {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl TryFrom<&str> for MessageKind {
    type Error = ParseMessageKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(ParseMessageKindError(value.to_owned())),
        }
    }
}

/// A single message in a chat session.
///
/// # Invariants
///
/// - `id`, `kind`, and `timestamp` never change after creation
/// - user messages are created `completed`
/// - assistant messages are created `processing` with
///   [`PROCESSING_PLACEHOLDER`] content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    id: MessageId,
    content: String,
    kind: MessageKind,
    status: RecordStatus,
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a completed user message.
    #[must_use]
    pub fn user(content: impl Into<String>, clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(MessageKind::User),
            content: content.into(),
            kind: MessageKind::User,
            status: RecordStatus::Completed,
            timestamp: clock.utc(),
        }
    }

    /// Creates an assistant placeholder awaiting the webhook reply.
    #[must_use]
    pub fn assistant_placeholder(clock: &impl Clock) -> Self {
        Self {
            id: MessageId::new(MessageKind::Assistant),
            content: PROCESSING_PLACEHOLDER.to_owned(),
            kind: MessageKind::Assistant,
            status: RecordStatus::Processing,
            timestamp: clock.utc(),
        }
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the message author.
    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> RecordStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns `true` for assistant messages.
    #[must_use]
    pub const fn is_assistant(&self) -> bool {
        matches!(self.kind, MessageKind::Assistant)
    }
}

impl Record for ChatMessage {
    type Id = MessageId;

    fn record_id(&self) -> MessageId {
        self.id
    }

    fn record_status(&self) -> RecordStatus {
        self.status
    }

    /// Content, when given, replaces the message text; otherwise the text is
    /// kept.
    fn with_status(&self, status: RecordStatus, content: Option<&str>) -> Self {
        Self {
            status,
            content: content.map_or_else(|| self.content.clone(), ToOwned::to_owned),
            ..self.clone()
        }
    }
}

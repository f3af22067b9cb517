//! Identifier type for chat messages.

use super::{MessageKind, ParseMessageIdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a chat message, prefixed with its kind.
///
/// Rendered as `user-<uuid>` or `assistant-<uuid>`.
///
/// # Examples
///
/// ```
/// use courier::chat::domain::{MessageId, MessageKind};
///
/// let id = MessageId::new(MessageKind::Assistant);
/// assert!(id.to_string().starts_with("assistant-"));
/// assert_eq!(id.to_string().parse::<MessageId>(), Ok(id));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MessageId {
    kind: MessageKind,
    uuid: Uuid,
}

impl MessageId {
    /// Creates a new random identifier for a message of `kind`.
    #[must_use]
    pub fn new(kind: MessageKind) -> Self {
        Self::from_parts(kind, Uuid::new_v4())
    }

    /// Creates an identifier from its parts.
    #[must_use]
    pub const fn from_parts(kind: MessageKind, uuid: Uuid) -> Self {
        Self { kind, uuid }
    }

    /// Returns the kind encoded in the prefix.
    #[must_use]
    pub const fn kind(self) -> MessageKind {
        self.kind
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        self.uuid
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.as_str(), self.uuid)
    }
}

impl FromStr for MessageId {
    type Err = ParseMessageIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = value
            .split_once('-')
            .ok_or_else(|| ParseMessageIdError::MissingKind(value.to_owned()))?;
        let kind = MessageKind::try_from(prefix)?;
        let uuid = Uuid::parse_str(rest).map_err(|err| ParseMessageIdError::InvalidUuid {
            value: value.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(Self::from_parts(kind, uuid))
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MessageId {
    type Error = ParseMessageIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

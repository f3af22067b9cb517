//! Error types for chat domain parsing.

use thiserror::Error;

/// Error returned while parsing a message kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown message kind: {0}")]
pub struct ParseMessageKindError(pub String);

/// Errors returned while parsing a message identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseMessageIdError {
    /// The identifier has no `<kind>-` prefix.
    #[error("message identifier '{0}' has no kind prefix")]
    MissingKind(String),

    /// The prefix is not a known message kind.
    #[error(transparent)]
    UnknownKind(#[from] ParseMessageKindError),

    /// The remainder is not a UUID.
    #[error("message identifier '{value}' has an invalid UUID: {reason}")]
    InvalidUuid {
        /// Rejected identifier.
        value: String,
        /// Parser failure.
        reason: String,
    },
}

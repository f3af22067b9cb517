//! Domain model for chat messages.

mod error;
mod ids;
mod message;

pub use error::{ParseMessageIdError, ParseMessageKindError};
pub use ids::MessageId;
pub use message::{ChatMessage, MessageKind, PROCESSING_PLACEHOLDER};

//! Application services for chat submissions.

mod session;

pub use session::{
    APOLOGY_REPLY, CHAT_FAILURES, ChatSessionService, FALLBACK_REPLY, SUCCESS_DESCRIPTION,
    SUCCESS_TITLE,
};

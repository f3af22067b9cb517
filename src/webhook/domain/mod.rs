//! Domain model for webhook requests, replies, and failures.

mod failure;
mod reply;
mod request;

pub use failure::{
    FailureDescriptions, FailureDiagnosis, WEBHOOK_MISCONFIGURED_MARKER,
    WORKFLOW_NOT_STARTED_MARKER, status_failure_detail,
};
pub use reply::WebhookReply;
pub use request::WebhookRequest;

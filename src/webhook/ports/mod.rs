//! Port contracts for webhook delivery.

pub mod client;

pub use client::{WebhookClient, WebhookError, WebhookResult};

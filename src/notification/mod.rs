//! User-facing notifications for settled submissions.
//!
//! Notifications are fire-and-forget: sinks never block the submission
//! pipeline and never report errors back to it.

pub mod adapters;
pub mod domain;
pub mod ports;

//! Task submissions for Courier.
//!
//! Every submission prepends one task record, newest first. The task moves
//! to `processing` while the webhook call runs, then to `completed` with the
//! reply stored as its response. On failure the task is reset to `pending`
//! so it can be resubmitted. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;

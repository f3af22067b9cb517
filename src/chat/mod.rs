//! Conversational submissions for Courier.
//!
//! Every submission appends a user message followed by an assistant
//! placeholder. The placeholder is completed with the webhook reply, or
//! overwritten with an apology when the webhook fails. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;

//! Courier: webhook-backed chat and task session management.
//!
//! This crate forwards user-entered text to a remote webhook (typically an
//! N8N workflow), renders the reply into an in-memory session, and tracks the
//! lifecycle of every record (`pending`, `processing`, `completed`).
//!
//! # Architecture
//!
//! Courier follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record and payload types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the webhook and notification
//!   collaborators
//! - **Adapters**: Concrete implementations of ports (`reqwest`, `tracing`,
//!   in-memory doubles)
//!
//! # Modules
//!
//! - [`session`]: Record store, lifecycle states, and the loading flag
//! - [`webhook`]: Outbound webhook payloads, failure classification, clients
//! - [`notification`]: User-facing success and failure notifications
//! - [`chat`]: Conversational submissions with assistant replies
//! - [`task`]: Task submissions listed newest-first
//! - [`config`]: Webhook endpoint configuration

pub mod chat;
pub mod config;
pub mod notification;
pub mod session;
pub mod task;
pub mod webhook;

//! Outbound webhook integration.
//!
//! Both submission pipelines send their text to one remote endpoint. The
//! module follows hexagonal architecture:
//!
//! - Payload and failure classification types in [`domain`]
//! - The client contract in [`ports`]
//! - HTTP and scripted in-memory clients in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;

//! Adapter implementations for the webhook client port.

pub mod http;
pub mod memory;

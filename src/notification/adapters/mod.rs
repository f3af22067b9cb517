//! Adapter implementations for the notification sink port.

mod log;
mod memory;

pub use log::TracingNotificationSink;
pub use memory::RecordingNotificationSink;

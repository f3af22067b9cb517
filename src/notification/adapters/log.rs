//! Notification sink that emits `tracing` events.

use crate::notification::{
    domain::{Notification, NotificationVariant},
    ports::NotificationSink,
};
use tracing::{info, warn};

/// Sink logging every notification; failures are logged at `warn` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn notify(&self, notification: Notification) {
        match notification.variant() {
            NotificationVariant::Default => info!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
            NotificationVariant::Destructive => warn!(
                title = notification.title(),
                description = notification.description(),
                "notification"
            ),
        }
    }
}

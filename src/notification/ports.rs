//! Port contract for notification delivery.

use super::domain::Notification;

/// Destination for user-facing notifications.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    /// Delivers a notification without blocking the caller.
    fn notify(&self, notification: Notification);
}

//! In-memory notification sink.

use crate::notification::{domain::Notification, ports::NotificationSink};
use std::sync::{Mutex, PoisonError};

/// Sink keeping every delivered notification in order.
#[derive(Debug, Default)]
pub struct RecordingNotificationSink {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotificationSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every delivered notification, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NotificationSink for RecordingNotificationSink {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::RecordingNotificationSink;
    use crate::notification::{domain::Notification, ports::NotificationSink};

    #[test]
    fn keeps_notifications_in_delivery_order() {
        let sink = RecordingNotificationSink::new();
        sink.notify(Notification::new("Message Sent", "first"));
        sink.notify(Notification::destructive("Error", "second"));

        let delivered = sink.notifications();
        assert_eq!(delivered.len(), 2);
        assert!(!delivered.first().is_some_and(Notification::is_destructive));
        assert_eq!(sink.last(), Some(Notification::destructive("Error", "second")));
    }

    #[test]
    fn starts_empty() {
        assert!(RecordingNotificationSink::new().last().is_none());
    }
}

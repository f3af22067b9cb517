//! Notification value types.

use serde::{Deserialize, Serialize};

/// Visual treatment requested for a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    /// Neutral or success notification.
    #[default]
    Default,
    /// Failure notification.
    Destructive,
}

/// Notification surfaced to the user when a submission settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    title: String,
    description: String,
    #[serde(default)]
    variant: NotificationVariant,
}

impl Notification {
    /// Creates a notification with the default variant.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    /// Creates a notification with the destructive variant.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the variant.
    #[must_use]
    pub const fn variant(&self) -> NotificationVariant {
        self.variant
    }

    /// Returns `true` for failure notifications.
    #[must_use]
    pub const fn is_destructive(&self) -> bool {
        matches!(self.variant, NotificationVariant::Destructive)
    }
}

//! Session identifier sent with every webhook request.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier correlating webhook requests that belong to one session.
///
/// Rendered as `session-<unix-millis>` from the clock at allocation time.
///
/// # Examples
///
/// ```
/// use courier::session::SessionId;
/// use mockable::DefaultClock;
///
/// let id = SessionId::from_clock(&DefaultClock);
/// assert!(id.as_str().starts_with("session-"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Allocates a session identifier from the current clock time.
    #[must_use]
    pub fn from_clock(clock: &impl Clock) -> Self {
        Self(format!("session-{}", clock.utc().timestamp_millis()))
    }

    /// Wraps an existing session identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

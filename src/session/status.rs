//! Lifecycle status shared by chat messages and tasks.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of a session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Record exists but no webhook call is running for it.
    Pending,
    /// A webhook call for the record is in flight.
    Processing,
    /// The record has settled with its final content.
    Completed,
}

impl RecordStatus {
    /// Returns the canonical lowercase representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
        }
    }

    /// Returns `true` for the settled `completed` status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns whether a record in this status may be replaced by one in
    /// `target`.
    ///
    /// Statuses only move forward, with two exceptions: a failed task is
    /// reset from `processing` to `pending`, and a completed chat reply may
    /// be overwritten with new content while staying `completed`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Processing | Self::Completed)
                | (Self::Processing, Self::Pending | Self::Completed)
                | (Self::Completed, Self::Completed)
        )
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl TryFrom<&str> for RecordStatus {
    type Error = ParseRecordStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseRecordStatusError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a record status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown record status: {0}")]
pub struct ParseRecordStatusError(pub String);

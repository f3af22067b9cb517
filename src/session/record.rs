//! Record contract implemented by chat messages and tasks.

use super::RecordStatus;
use std::fmt;

/// A single entry tracked by a session store.
///
/// Implementations are immutable values. A status change produces a new
/// record through [`Record::with_status`] which the store swaps in place of
/// the old one.
pub trait Record: Clone + Send + Sync {
    /// Identifier type, stable for the lifetime of the record.
    type Id: Copy + Eq + fmt::Display + Send + Sync;

    /// Returns the record identifier.
    fn record_id(&self) -> Self::Id;

    /// Returns the current lifecycle status.
    fn record_status(&self) -> RecordStatus;

    /// Returns a copy of this record carrying `status`.
    ///
    /// `content` is the settled text supplied alongside the status change,
    /// if any. Each record type decides how that text is applied.
    #[must_use]
    fn with_status(&self, status: RecordStatus, content: Option<&str>) -> Self;
}

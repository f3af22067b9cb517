//! In-memory record sequence owned by a session.

use super::{Record, RecordStatus};
use std::sync::{PoisonError, RwLock};
use tracing::warn;

/// Ordered, in-memory sequence of session records.
///
/// Every write builds a complete replacement sequence under the write lock
/// and swaps it in, so readers only ever observe whole sequences. Updates to
/// unknown identifiers are no-ops.
///
/// # Examples
///
/// ```
/// use courier::session::{Record, RecordStatus, RecordStore};
/// use courier::task::domain::Task;
/// use mockable::DefaultClock;
///
/// let store = RecordStore::new();
/// let task = Task::new("summarise the report", &DefaultClock);
/// store.prepend(task.clone());
/// store.update_status(task.record_id(), RecordStatus::Completed, Some("done"));
///
/// let stored = store.find(task.record_id()).expect("task is stored");
/// assert_eq!(stored.response(), Some("done"));
/// ```
#[derive(Debug)]
pub struct RecordStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record after all existing records.
    pub fn append(&self, record: R) {
        self.replace(|records| {
            let mut next = Vec::with_capacity(records.len() + 1);
            next.extend_from_slice(records);
            next.push(record);
            next
        });
    }

    /// Adds a record before all existing records.
    pub fn prepend(&self, record: R) {
        self.replace(|records| {
            let mut next = Vec::with_capacity(records.len() + 1);
            next.push(record);
            next.extend_from_slice(records);
            next
        });
    }

    /// Replaces the record matching `id` with a copy carrying `status` and
    /// `content`.
    ///
    /// Does nothing when no record matches.
    pub fn update_status(&self, id: R::Id, status: RecordStatus, content: Option<&str>) {
        self.replace(|records| {
            records
                .iter()
                .map(|record| {
                    if record.record_id() == id {
                        replacement(record, status, content)
                    } else {
                        record.clone()
                    }
                })
                .collect()
        });
    }

    /// Replaces the most recent record satisfying `predicate`, scanning from
    /// the end of the sequence, with a copy carrying `status` and `content`.
    ///
    /// Returns the identifier of the replaced record, or `None` when no
    /// record matched.
    pub fn update_last_matching(
        &self,
        predicate: impl Fn(&R) -> bool,
        status: RecordStatus,
        content: Option<&str>,
    ) -> Option<R::Id> {
        let mut replaced = None;
        self.replace(|records| {
            let position = records.iter().rposition(&predicate);
            records
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    if Some(index) == position {
                        replaced = Some(record.record_id());
                        replacement(record, status, content)
                    } else {
                        record.clone()
                    }
                })
                .collect()
        });
        replaced
    }

    /// Returns a copy of the record matching `id`.
    #[must_use]
    pub fn find(&self, id: R::Id) -> Option<R> {
        self.read(|records| records.iter().find(|record| record.record_id() == id).cloned())
    }

    /// Returns a copy of the current sequence.
    #[must_use]
    pub fn snapshot(&self) -> Vec<R> {
        self.read(<[R]>::to_vec)
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read(<[R]>::len)
    }

    /// Returns `true` when no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read(<[R]>::is_empty)
    }

    fn read<T>(&self, view: impl FnOnce(&[R]) -> T) -> T {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);
        view(&records)
    }

    fn replace(&self, build: impl FnOnce(&[R]) -> Vec<R>) {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);
        let next = build(&records);
        *records = next;
    }
}

fn replacement<R: Record>(record: &R, status: RecordStatus, content: Option<&str>) -> R {
    let current = record.record_status();
    if !current.can_transition_to(status) {
        warn!(
            id = %record.record_id(),
            from = %current,
            to = %status,
            "replacing record with an out-of-order status"
        );
    }
    record.with_status(status, content)
}

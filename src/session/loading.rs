//! Advisory loading flag raised while a submission is in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag reporting whether a submission is currently in flight.
///
/// The flag is a signal for front ends (for example to disable the input
/// while a reply is pending). It is not a lock: nothing stops a caller from
/// starting a second submission while it is set.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    /// Creates a cleared flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while a submission holds a [`LoadingGuard`].
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raises the flag until the returned guard is dropped.
    #[must_use = "the flag is cleared as soon as the guard is dropped"]
    pub fn begin(&self) -> LoadingGuard {
        self.0.store(true, Ordering::Release);
        LoadingGuard {
            flag: Arc::clone(&self.0),
        }
    }
}

/// Clears the owning [`LoadingFlag`] when dropped.
#[derive(Debug)]
pub struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

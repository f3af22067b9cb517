//! Domain model for submitted tasks.
//!
//! A task is both the user-originated record and the responder record of
//! its submission: the submitted text never changes while the status and
//! response follow the webhook outcome.

mod ids;
mod task;

pub use ids::TaskId;
pub use task::Task;

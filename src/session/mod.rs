//! Session state shared by the chat and task submission pipelines.
//!
//! A session owns an ordered, in-memory sequence of records and an advisory
//! loading flag. Records are never mutated in place: every status change
//! builds a replacement record and swaps the whole sequence.

mod ids;
mod loading;
mod outcome;
mod record;
mod status;
mod store;

pub use ids::SessionId;
pub use loading::{LoadingFlag, LoadingGuard};
pub use outcome::{SubmitOutcome, SubmitRejection, admit_input};
pub use record::Record;
pub use status::{ParseRecordStatusError, RecordStatus};
pub use store::RecordStore;

#[cfg(test)]
mod tests;

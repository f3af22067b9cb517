//! Submission results reported back to front ends.

use super::LoadingFlag;
use crate::webhook::domain::FailureDiagnosis;

/// Reason a submission was turned away before any record was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    /// The input was empty after trimming.
    EmptyInput,
    /// Another submission was still in flight.
    Busy,
}

/// Result of one submission through a session pipeline.
///
/// Webhook failures are not errors from the caller's point of view: they are
/// reconciled into the session and reported through the notification sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<Id> {
    /// Nothing was created or sent.
    Rejected(SubmitRejection),
    /// The webhook replied and the responder record was completed.
    Completed {
        /// Responder record identifier.
        id: Id,
        /// Text stored on the responder record.
        reply: String,
    },
    /// The webhook call failed and the session was reconciled.
    Failed {
        /// Record that absorbed the failure, if one was found.
        id: Option<Id>,
        /// Classification of the failure detail.
        diagnosis: FailureDiagnosis,
        /// User-facing description sent to the notification sink.
        description: String,
    },
}

impl<Id: Copy> SubmitOutcome<Id> {
    /// Returns the responder record identifier, if the submission reached
    /// the webhook and a record absorbed the outcome.
    #[must_use]
    pub fn id(&self) -> Option<Id> {
        match self {
            Self::Rejected(_) => None,
            Self::Completed { id, .. } => Some(*id),
            Self::Failed { id, .. } => *id,
        }
    }

    /// Returns `true` when the submission was turned away.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Applies the input gate shared by both pipelines.
///
/// Returns the trimmed text when it is non-empty and no submission is in
/// flight.
///
/// # Errors
///
/// Returns [`SubmitRejection::EmptyInput`] for blank input and
/// [`SubmitRejection::Busy`] while `loading` is raised.
///
/// # Examples
///
/// ```
/// use courier::session::{LoadingFlag, SubmitRejection, admit_input};
///
/// let loading = LoadingFlag::new();
/// assert_eq!(admit_input("  hi  ", &loading), Ok("hi"));
/// assert_eq!(admit_input("   ", &loading), Err(SubmitRejection::EmptyInput));
/// ```
pub fn admit_input<'a>(raw: &'a str, loading: &LoadingFlag) -> Result<&'a str, SubmitRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SubmitRejection::EmptyInput);
    }
    if loading.is_loading() {
        return Err(SubmitRejection::Busy);
    }
    Ok(trimmed)
}

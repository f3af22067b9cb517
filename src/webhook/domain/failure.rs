//! Classification of webhook failures into user-facing explanations.
//!
//! The remote workflow engine reports failures as free text only. Two known
//! phrases are recognised by substring match; everything else is generic.

use serde_json::Value;

/// Phrase reported when the remote workflow is inactive or missing.
pub const WORKFLOW_NOT_STARTED_MARKER: &str = "Workflow could not be started";

/// Phrase reported when the webhook node is not set to respond.
pub const WEBHOOK_MISCONFIGURED_MARKER: &str = "Webhook node not correctly configured";

/// Diagnosis derived from a failure detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureDiagnosis {
    /// The remote workflow could not be started.
    WorkflowNotStarted,
    /// The webhook node is configured not to respond.
    WebhookMisconfigured,
    /// Any other failure.
    Unrecognised,
}

impl FailureDiagnosis {
    /// Classifies a failure detail by the known phrases it contains.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier::webhook::domain::FailureDiagnosis;
    ///
    /// let diagnosis = FailureDiagnosis::classify("Workflow could not be started!");
    /// assert_eq!(diagnosis, FailureDiagnosis::WorkflowNotStarted);
    /// ```
    #[must_use]
    pub fn classify(detail: &str) -> Self {
        if detail.contains(WORKFLOW_NOT_STARTED_MARKER) {
            Self::WorkflowNotStarted
        } else if detail.contains(WEBHOOK_MISCONFIGURED_MARKER) {
            Self::WebhookMisconfigured
        } else {
            Self::Unrecognised
        }
    }
}

/// User-facing descriptions for each diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureDescriptions {
    /// Shown for [`FailureDiagnosis::WorkflowNotStarted`].
    pub workflow_not_started: &'static str,
    /// Shown for [`FailureDiagnosis::WebhookMisconfigured`].
    pub webhook_misconfigured: &'static str,
    /// Shown for [`FailureDiagnosis::Unrecognised`].
    pub unrecognised: &'static str,
}

impl FailureDescriptions {
    /// Returns the description for `diagnosis`.
    #[must_use]
    pub const fn describe(&self, diagnosis: FailureDiagnosis) -> &'static str {
        match diagnosis {
            FailureDiagnosis::WorkflowNotStarted => self.workflow_not_started,
            FailureDiagnosis::WebhookMisconfigured => self.webhook_misconfigured,
            FailureDiagnosis::Unrecognised => self.unrecognised,
        }
    }
}

/// Extracts the failure detail from a non-success response.
///
/// A JSON body contributes its non-empty `message` string. A non-JSON body
/// contributes its raw text. Otherwise the detail names the status code.
#[must_use]
pub fn status_failure_detail(status: u16, body: &str) -> String {
    let fallback = || format!("HTTP error! status: {status}");
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map_or_else(fallback, ToOwned::to_owned),
        Err(_) if body.is_empty() => fallback(),
        Err(_) => body.to_owned(),
    }
}

//! Unit tests for failure detail extraction and classification.

use crate::webhook::domain::{FailureDescriptions, FailureDiagnosis, status_failure_detail};
use crate::webhook::ports::WebhookError;
use rstest::rstest;

const DESCRIPTIONS: FailureDescriptions = FailureDescriptions {
    workflow_not_started: "workflow",
    webhook_misconfigured: "misconfigured",
    unrecognised: "generic",
};

#[rstest]
#[case(500, r#"{"code":404,"message":"Workflow could not be started!"}"#, "Workflow could not be started!")]
#[case(500, r#"{"code":0,"message":""}"#, "HTTP error! status: 500")]
#[case(502, r#"{"error":"bad gateway"}"#, "HTTP error! status: 502")]
#[case(503, r#""just a string""#, "HTTP error! status: 503")]
#[case(404, "Not Found", "Not Found")]
#[case(500, "", "HTTP error! status: 500")]
fn status_failure_detail_follows_body_shape(
    #[case] status: u16,
    #[case] body: &str,
    #[case] expected: &str,
) {
    assert_eq!(status_failure_detail(status, body), expected);
}

#[rstest]
#[case("Workflow could not be started!", FailureDiagnosis::WorkflowNotStarted)]
#[case(
    "Webhook node not correctly configured",
    FailureDiagnosis::WebhookMisconfigured
)]
#[case(
    "Error: Workflow could not be started because Webhook node not correctly configured",
    FailureDiagnosis::WorkflowNotStarted
)]
#[case("workflow could not be started", FailureDiagnosis::Unrecognised)]
#[case("HTTP error! status: 500", FailureDiagnosis::Unrecognised)]
fn classify_matches_known_phrases(#[case] detail: &str, #[case] expected: FailureDiagnosis) {
    assert_eq!(FailureDiagnosis::classify(detail), expected);
}

#[rstest]
#[case(FailureDiagnosis::WorkflowNotStarted, "workflow")]
#[case(FailureDiagnosis::WebhookMisconfigured, "misconfigured")]
#[case(FailureDiagnosis::Unrecognised, "generic")]
fn descriptions_map_each_diagnosis(#[case] diagnosis: FailureDiagnosis, #[case] expected: &str) {
    assert_eq!(DESCRIPTIONS.describe(diagnosis), expected);
}

#[rstest]
fn status_error_exposes_extracted_detail() {
    let err = WebhookError::from_status_body(
        500,
        r#"{"message":"Webhook node not correctly configured"}"#,
    );

    assert_eq!(err.detail(), "Webhook node not correctly configured");
    assert_eq!(err.diagnosis(), FailureDiagnosis::WebhookMisconfigured);
    assert_eq!(
        err.to_string(),
        "webhook returned HTTP 500: Webhook node not correctly configured"
    );
}

#[rstest]
fn transport_error_is_classified_by_its_message() {
    let err = WebhookError::transport(std::io::Error::other("connection refused"));

    assert_eq!(err.detail(), "connection refused");
    assert_eq!(err.diagnosis(), FailureDiagnosis::Unrecognised);
}

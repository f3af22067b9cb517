//! Application services for task submissions.

mod submission;

pub use submission::{
    FALLBACK_RESPONSE, SUCCESS_DESCRIPTION, SUCCESS_TITLE, TASK_FAILURES, TaskSubmissionError,
    TaskSubmissionResult, TaskSubmissionService,
};

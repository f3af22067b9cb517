//! Service layer for task submission and resubmission.

use crate::notification::{domain::Notification, ports::NotificationSink};
use crate::session::{
    LoadingFlag, RecordStatus, RecordStore, SessionId, SubmitOutcome, admit_input,
};
use crate::task::domain::{Task, TaskId};
use crate::webhook::{
    domain::{FailureDescriptions, WebhookRequest},
    ports::WebhookClient,
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Response stored when a successful reply carries no text.
pub const FALLBACK_RESPONSE: &str = "Task completed successfully";

/// Title of the success notification.
pub const SUCCESS_TITLE: &str = "Task Completed";

/// Description of the success notification.
pub const SUCCESS_DESCRIPTION: &str = "Your AI agent has processed the task successfully.";

/// Title of the failure notification.
const FAILURE_TITLE: &str = "Error";

/// Failure descriptions for task submissions.
pub const TASK_FAILURES: FailureDescriptions = FailureDescriptions {
    workflow_not_started: "N8N Workflow error: Please check your webhook configuration in N8N.",
    webhook_misconfigured: "N8N Configuration error: Set webhook to 'Respond to Webhook Node' mode.",
    unrecognised: "Failed to process task. Please try again.",
};

/// Errors returned when resubmitting an existing task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskSubmissionError {
    /// No task with the identifier exists in this session.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task is in flight or already completed.
    #[error("task {id} cannot be resubmitted while {status}")]
    NotPending {
        /// Task identifier.
        id: TaskId,
        /// Current task status.
        status: RecordStatus,
    },
}

/// Result type for task resubmission.
pub type TaskSubmissionResult<T> = Result<T, TaskSubmissionError>;

/// Task list, loading flag, and the submission pipeline.
///
/// Unlike chat sessions, every request carries a freshly allocated session
/// identifier together with the task identifier and timestamp.
pub struct TaskSubmissionService<W, N, C>
where
    W: WebhookClient,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    webhook: Arc<W>,
    notifier: Arc<N>,
    clock: Arc<C>,
    tasks: RecordStore<Task>,
    loading: LoadingFlag,
}

impl<W, N, C> TaskSubmissionService<W, N, C>
where
    W: WebhookClient,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates a service with an empty task list.
    #[must_use]
    pub fn new(webhook: Arc<W>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            webhook,
            notifier,
            clock,
            tasks: RecordStore::new(),
            loading: LoadingFlag::new(),
        }
    }

    /// Returns the tasks, newest first.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.snapshot()
    }

    /// Returns the task with the given identifier.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<Task> {
        self.tasks.find(id)
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Returns a handle observing this service's loading flag.
    #[must_use]
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Submits raw input from the front end.
    ///
    /// The input is trimmed. Blank input, or input arriving while another
    /// submission is in flight, is rejected without creating a task.
    pub async fn submit(&self, input: &str) -> SubmitOutcome<TaskId> {
        match admit_input(input, &self.loading) {
            Ok(content) => self.submit_task(content).await,
            Err(rejection) => SubmitOutcome::Rejected(rejection),
        }
    }

    /// Creates a task for `content` and sends it, bypassing the input gate.
    pub async fn submit_task(&self, content: &str) -> SubmitOutcome<TaskId> {
        let task = Task::new(content, &*self.clock);
        self.tasks.prepend(task.clone());
        self.send_task(&task).await
    }

    /// Sends an existing pending task again under the same identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskSubmissionError::NotFound`] for unknown tasks and
    /// [`TaskSubmissionError::NotPending`] for tasks that are in flight or
    /// completed.
    pub async fn resubmit(&self, id: TaskId) -> TaskSubmissionResult<SubmitOutcome<TaskId>> {
        let task = self.tasks.find(id).ok_or(TaskSubmissionError::NotFound(id))?;
        if task.status() != RecordStatus::Pending {
            return Err(TaskSubmissionError::NotPending {
                id,
                status: task.status(),
            });
        }
        Ok(self.send_task(&task).await)
    }

    async fn send_task(&self, task: &Task) -> SubmitOutcome<TaskId> {
        let _loading = self.loading.begin();
        let id = task.id();
        self.tasks.update_status(id, RecordStatus::Processing, None);

        let request = WebhookRequest::new(task.content(), SessionId::from_clock(&*self.clock))
            .with_task_id(id.to_string())
            .with_timestamp(task.timestamp());

        match self.webhook.post(&request).await {
            Ok(reply) => {
                let text = reply.text_or(FALLBACK_RESPONSE);
                self.tasks
                    .update_status(id, RecordStatus::Completed, Some(&text));
                info!(task_id = %id, "task completed");
                self.notifier
                    .notify(Notification::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
                SubmitOutcome::Completed { id, reply: text }
            }
            Err(err) => {
                warn!(task_id = %id, error = %err, "task submission failed");
                self.tasks.update_status(id, RecordStatus::Pending, None);
                let diagnosis = err.diagnosis();
                let description = TASK_FAILURES.describe(diagnosis);
                self.notifier
                    .notify(Notification::destructive(FAILURE_TITLE, description));
                SubmitOutcome::Failed {
                    id: Some(id),
                    diagnosis,
                    description: description.to_owned(),
                }
            }
        }
    }
}

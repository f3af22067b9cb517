//! Shared world state for task submission BDD scenarios.

use std::sync::Arc;

use courier::notification::adapters::RecordingNotificationSink;
use courier::session::SubmitOutcome;
use courier::task::{
    domain::{Task, TaskId},
    services::{TaskSubmissionResult, TaskSubmissionService},
};
use courier::webhook::adapters::memory::ScriptedWebhookClient;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskSubmissionService<ScriptedWebhookClient, RecordingNotificationSink, DefaultClock>;

/// Scenario world for task submission behaviour tests.
pub struct TaskWorld {
    pub webhook: Arc<ScriptedWebhookClient>,
    pub notifier: Arc<RecordingNotificationSink>,
    pub service: TestTaskService,
    pub last_outcome: Option<SubmitOutcome<TaskId>>,
    pub last_resubmit: Option<TaskSubmissionResult<SubmitOutcome<TaskId>>>,
}

impl TaskWorld {
    /// Creates a world with an empty task list and no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        let webhook = Arc::new(ScriptedWebhookClient::new());
        let notifier = Arc::new(RecordingNotificationSink::new());
        let service = TaskSubmissionService::new(
            Arc::clone(&webhook),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        );
        Self {
            webhook,
            notifier,
            service,
            last_outcome: None,
            last_resubmit: None,
        }
    }

    /// Returns the most recently created task.
    pub fn newest_task(&self) -> Result<Task, eyre::Report> {
        self.service
            .tasks()
            .into_iter()
            .next()
            .ok_or_else(|| eyre::eyre!("no tasks in session"))
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

//! Shared world state for chat session BDD scenarios.

use std::sync::Arc;

use courier::chat::{domain::MessageId, services::ChatSessionService};
use courier::notification::adapters::RecordingNotificationSink;
use courier::session::SubmitOutcome;
use courier::webhook::adapters::memory::ScriptedWebhookClient;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestChatService =
    ChatSessionService<ScriptedWebhookClient, RecordingNotificationSink, DefaultClock>;

/// Scenario world for chat session behaviour tests.
pub struct ChatWorld {
    pub webhook: Arc<ScriptedWebhookClient>,
    pub notifier: Arc<RecordingNotificationSink>,
    pub service: TestChatService,
    pub last_outcome: Option<SubmitOutcome<MessageId>>,
}

impl ChatWorld {
    /// Creates a world with an empty session and no scripted replies.
    #[must_use]
    pub fn new() -> Self {
        let webhook = Arc::new(ScriptedWebhookClient::new());
        let notifier = Arc::new(RecordingNotificationSink::new());
        let service = ChatSessionService::new(
            Arc::clone(&webhook),
            Arc::clone(&notifier),
            Arc::new(DefaultClock),
        );
        Self {
            webhook,
            notifier,
            service,
            last_outcome: None,
        }
    }
}

impl Default for ChatWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ChatWorld {
    ChatWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

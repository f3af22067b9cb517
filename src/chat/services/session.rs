//! Service layer for chat submissions.

use crate::chat::domain::{ChatMessage, MessageId};
use crate::notification::{domain::Notification, ports::NotificationSink};
use crate::session::{
    LoadingFlag, RecordStatus, RecordStore, SessionId, SubmitOutcome, admit_input,
};
use crate::webhook::{
    domain::{FailureDescriptions, WebhookReply, WebhookRequest},
    ports::{WebhookClient, WebhookError},
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{info, warn};

/// Assistant content used when a successful reply carries no text.
pub const FALLBACK_REPLY: &str = "I received your message but couldn't generate a response.";

/// Assistant content written over the latest assistant message on failure.
pub const APOLOGY_REPLY: &str =
    "Sorry, I encountered an error processing your message. Please try again.";

/// Title of the success notification.
pub const SUCCESS_TITLE: &str = "Message Sent";

/// Description of the success notification.
pub const SUCCESS_DESCRIPTION: &str = "AI has responded to your message.";

/// Title of the failure notification.
const FAILURE_TITLE: &str = "Error";

/// Failure descriptions for chat submissions.
pub const CHAT_FAILURES: FailureDescriptions = FailureDescriptions {
    workflow_not_started: "N8N Workflow error: Please check your webhook configuration.",
    webhook_misconfigured: "N8N Configuration error: Check webhook response settings.",
    unrecognised: "Failed to send message. Please try again.",
};

/// Chat session: message history, loading flag, and the submission
/// pipeline.
///
/// One session identifier is allocated at construction and sent with every
/// request.
pub struct ChatSessionService<W, N, C>
where
    W: WebhookClient,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    webhook: Arc<W>,
    notifier: Arc<N>,
    clock: Arc<C>,
    session_id: SessionId,
    messages: RecordStore<ChatMessage>,
    loading: LoadingFlag,
}

impl<W, N, C> ChatSessionService<W, N, C>
where
    W: WebhookClient,
    N: NotificationSink,
    C: Clock + Send + Sync,
{
    /// Creates an empty chat session.
    #[must_use]
    pub fn new(webhook: Arc<W>, notifier: Arc<N>, clock: Arc<C>) -> Self {
        let session_id = SessionId::from_clock(&*clock);
        Self {
            webhook,
            notifier,
            clock,
            session_id,
            messages: RecordStore::new(),
            loading: LoadingFlag::new(),
        }
    }

    /// Returns the session identifier sent with every request.
    #[must_use]
    pub const fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Returns the messages in chronological order.
    #[must_use]
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.messages.snapshot()
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    /// Returns a handle observing this session's loading flag.
    #[must_use]
    pub fn loading_flag(&self) -> LoadingFlag {
        self.loading.clone()
    }

    /// Submits raw input from the front end.
    ///
    /// The input is trimmed. Blank input, or input arriving while another
    /// submission is in flight, is rejected without touching the session.
    pub async fn submit(&self, input: &str) -> SubmitOutcome<MessageId> {
        match admit_input(input, &self.loading) {
            Ok(content) => self.send_message(content).await,
            Err(rejection) => SubmitOutcome::Rejected(rejection),
        }
    }

    /// Sends `content` to the webhook without applying the input gate.
    ///
    /// Appends the user message and an assistant placeholder, makes one
    /// webhook call, and settles the placeholder. Failures are reconciled
    /// into the history and reported through the notification sink.
    pub async fn send_message(&self, content: &str) -> SubmitOutcome<MessageId> {
        let _loading = self.loading.begin();

        self.messages.append(ChatMessage::user(content, &*self.clock));
        let placeholder = ChatMessage::assistant_placeholder(&*self.clock);
        let responder = placeholder.id();
        self.messages.append(placeholder);

        let request = WebhookRequest::new(content, self.session_id.clone());
        match self.webhook.post(&request).await {
            Ok(reply) => self.complete(responder, &reply),
            Err(err) => self.fail(&err),
        }
    }

    fn complete(&self, responder: MessageId, reply: &WebhookReply) -> SubmitOutcome<MessageId> {
        let text = reply.text_or(FALLBACK_REPLY);
        self.messages
            .update_status(responder, RecordStatus::Completed, Some(&text));
        info!(session_id = %self.session_id, message_id = %responder, "chat reply received");
        self.notifier
            .notify(Notification::new(SUCCESS_TITLE, SUCCESS_DESCRIPTION));
        SubmitOutcome::Completed {
            id: responder,
            reply: text,
        }
    }

    fn fail(&self, err: &WebhookError) -> SubmitOutcome<MessageId> {
        warn!(session_id = %self.session_id, error = %err, "chat submission failed");
        let absorbed = self.messages.update_last_matching(
            ChatMessage::is_assistant,
            RecordStatus::Completed,
            Some(APOLOGY_REPLY),
        );
        let diagnosis = err.diagnosis();
        let description = CHAT_FAILURES.describe(diagnosis);
        self.notifier
            .notify(Notification::destructive(FAILURE_TITLE, description));
        SubmitOutcome::Failed {
            id: absorbed,
            diagnosis,
            description: description.to_owned(),
        }
    }
}

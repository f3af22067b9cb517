//! Line-oriented terminal front end for Courier sessions.
//!
//! Usage:
//!
//! ```text
//! courier [chat|tasks] [config-path]
//! ```
//!
//! Each line read from standard input is submitted through the selected
//! pipeline; the current records are written to standard output after every
//! submission. The optional JSON file at `config-path` is read with
//! [`CourierConfig::from_json_path`] and then overridden from the
//! environment (`COURIER_WEBHOOK_URL`, `COURIER_WEBHOOK_TIMEOUT_SECS`).
//! Logs go to standard error, filtered by `RUST_LOG` (default `info`).

use courier::chat::domain::ChatMessage;
use courier::chat::services::ChatSessionService;
use courier::config::{ConfigError, CourierConfig};
use courier::notification::adapters::TracingNotificationSink;
use courier::session::{SubmitOutcome, SubmitRejection};
use courier::task::domain::Task;
use courier::task::services::TaskSubmissionService;
use courier::webhook::adapters::http::HttpWebhookClient;
use courier::webhook::ports::WebhookError;
use mockable::DefaultClock;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::runtime::Builder;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Lines = tokio::io::Lines<BufReader<Stdin>>;

/// Errors that can occur while running the front end.
#[derive(Debug, Error)]
enum FrontEndError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create webhook client: {0}")]
    Webhook(#[from] WebhookError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Chat,
    Tasks,
}

impl Mode {
    fn parse(arg: Option<&str>) -> Result<Self, FrontEndError> {
        match arg {
            None | Some("chat") => Ok(Self::Chat),
            Some("tasks") => Ok(Self::Tasks),
            Some(other) => Err(FrontEndError::InvalidArgs(format!(
                "unknown mode '{other}'; expected chat or tasks"
            ))),
        }
    }
}

fn main() -> Result<(), BoxError> {
    init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args).map_err(Into::into)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &[String]) -> Result<(), FrontEndError> {
    if args.len() > 2 {
        return Err(FrontEndError::InvalidArgs(
            "expected at most a mode and a config path".to_owned(),
        ));
    }
    let mode = Mode::parse(args.first().map(String::as_str))?;
    let config = load_config(args.get(1).map(String::as_str))?;
    info!(url = config.webhook_url(), ?mode, "starting courier");

    let webhook = Arc::new(HttpWebhookClient::new(&config)?);
    let notifier = Arc::new(TracingNotificationSink);
    let clock = Arc::new(DefaultClock);

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(FrontEndError::RuntimeInit)?;
    runtime.block_on(async {
        let lines = BufReader::new(tokio::io::stdin()).lines();
        match mode {
            Mode::Chat => run_chat(ChatSessionService::new(webhook, notifier, clock), lines).await,
            Mode::Tasks => {
                run_tasks(TaskSubmissionService::new(webhook, notifier, clock), lines).await
            }
        }
    })
}

fn load_config(path: Option<&str>) -> Result<CourierConfig, FrontEndError> {
    let base = match path {
        Some(path) => CourierConfig::from_json_path(path)?,
        None => CourierConfig::default(),
    };
    Ok(base.with_env_overrides()?)
}

async fn run_chat(
    service: ChatSessionService<HttpWebhookClient, TracingNotificationSink, DefaultClock>,
    mut lines: Lines,
) -> Result<(), FrontEndError> {
    while let Some(line) = lines.next_line().await? {
        let outcome = service.submit(&line).await;
        report_rejection(&outcome);
        let messages = service.messages();
        let mut out = io::stdout().lock();
        out.write_all(render_messages(&messages).as_bytes())?;
        if !messages.is_empty() {
            writeln!(out, "Session ID: {}", service.session_id())?;
        }
        out.flush()?;
    }
    Ok(())
}

async fn run_tasks(
    service: TaskSubmissionService<HttpWebhookClient, TracingNotificationSink, DefaultClock>,
    mut lines: Lines,
) -> Result<(), FrontEndError> {
    while let Some(line) = lines.next_line().await? {
        let outcome = service.submit(&line).await;
        report_rejection(&outcome);
        let mut out = io::stdout().lock();
        out.write_all(render_tasks(&service.tasks()).as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

fn report_rejection<Id>(outcome: &SubmitOutcome<Id>) {
    if let SubmitOutcome::Rejected(reason) = outcome {
        match reason {
            SubmitRejection::EmptyInput => debug!("ignoring blank input"),
            SubmitRejection::Busy => debug!("ignoring input while a submission is in flight"),
        }
    }
}

/// Renders chat messages oldest first, one per line.
fn render_messages(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            line(
                message.status(),
                message.kind().as_str(),
                message.content(),
            )
        })
        .collect()
}

/// Renders tasks newest first, with the response indented under each task.
fn render_tasks(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks yet. Send your first message above!\n".to_owned();
    }
    tasks
        .iter()
        .map(|task| {
            let mut rendered = line(task.status(), "task", task.content());
            if let Some(response) = task.response() {
                rendered.push_str(&format!("    -> {response}\n"));
            }
            rendered
        })
        .collect()
}

fn line(status: impl Display, label: &str, text: &str) -> String {
    format!("[{status:<10}] {label}: {text}\n")
}

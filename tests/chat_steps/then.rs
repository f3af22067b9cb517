//! Then steps for chat session BDD scenarios.

use super::world::ChatWorld;
use courier::session::RecordStatus;
use rstest_bdd_macros::then;

#[then("the session holds {count:u64} messages")]
fn session_holds_messages(world: &ChatWorld, count: u64) -> Result<(), eyre::Report> {
    let held = u64::try_from(world.service.messages().len())?;
    if held != count {
        return Err(eyre::eyre!("expected {count} messages, found {held}"));
    }
    Ok(())
}

#[then(r#"the latest assistant message is completed with "{content}""#)]
fn latest_assistant_completed(world: &ChatWorld, content: String) -> Result<(), eyre::Report> {
    let messages = world.service.messages();
    let assistant = messages
        .iter()
        .rev()
        .find(|message| message.is_assistant())
        .ok_or_else(|| eyre::eyre!("no assistant message in session"))?;

    if assistant.status() != RecordStatus::Completed {
        return Err(eyre::eyre!(
            "expected completed assistant message, found {}",
            assistant.status()
        ));
    }
    if assistant.content() != content {
        return Err(eyre::eyre!(
            "expected assistant content {content:?}, found {:?}",
            assistant.content()
        ));
    }
    Ok(())
}

#[then(r#"a success notification titled "{title}" is emitted"#)]
fn success_notification(world: &ChatWorld, title: String) -> Result<(), eyre::Report> {
    let notification = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification emitted"))?;
    if notification.is_destructive() || notification.title() != title {
        return Err(eyre::eyre!("unexpected notification {notification:?}"));
    }
    Ok(())
}

#[then(r#"an error notification reads "{description}""#)]
fn error_notification(world: &ChatWorld, description: String) -> Result<(), eyre::Report> {
    let notification = world
        .notifier
        .last()
        .ok_or_else(|| eyre::eyre!("no notification emitted"))?;
    if !notification.is_destructive() || notification.description() != description {
        return Err(eyre::eyre!("unexpected notification {notification:?}"));
    }
    Ok(())
}

#[then("no request reaches the webhook")]
fn no_request(world: &ChatWorld) -> Result<(), eyre::Report> {
    let sent = world.webhook.requests().len();
    if sent != 0 {
        return Err(eyre::eyre!("expected no webhook requests, found {sent}"));
    }
    Ok(())
}

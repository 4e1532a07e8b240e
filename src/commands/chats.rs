//! Chat commands: send, chats, messages.

use anyhow::{Context, Result};

use super::require_login;
use crate::messenger::Messenger;
use crate::output::OutputControls;

/// Send a message in a brand-new private chat.
pub fn send(
    messenger: &mut Messenger,
    user: &str,
    password: &str,
    recipient: &str,
    text: &str,
    output: &OutputControls,
) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    let sent = messenger
        .new_message(&user, recipient, text)
        .with_context(|| format!("Failed to send message to '{}'", recipient))?;

    if output.json {
        output.print(&sent);
    } else {
        println!("Message sent to {} (chat {})", recipient, sent.chat_id);
    }
    Ok(())
}

/// Latest chat in each direction.
pub fn chats(messenger: &Messenger, user: &str, password: &str, output: &OutputControls) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    let overview = messenger.list_chats(&user)?;

    if output.json {
        output.print(&overview);
        return Ok(());
    }

    if overview.initiated_chat.is_none() && overview.joined_chat.is_none() {
        println!("No chats found.");
        return Ok(());
    }
    if let Some(chat_id) = overview.initiated_chat {
        println!("Chat {} (started by you):", chat_id);
        for member in &overview.members {
            println!("  {}", member);
        }
    }
    if let (Some(chat_id), Some(initiator)) = (overview.joined_chat, overview.initiator.as_deref()) {
        println!("Chat {} (started by {})", chat_id, initiator);
    }
    Ok(())
}

/// Every message visible to the user, tab-separated with a header.
pub fn messages(messenger: &Messenger, user: &str, password: &str, output: &OutputControls) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    let table = messenger.chat_messages(&user)?;

    if output.json {
        output.print(&table);
    } else if table.is_empty() {
        println!("No messages found.");
    } else {
        for line in table.render() {
            println!("{}", line);
        }
    }
    Ok(())
}

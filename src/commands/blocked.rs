//! Block list commands: blocked, block, unblock.

use anyhow::Result;
use serde_json::json;

use super::require_login;
use crate::messenger::Messenger;
use crate::output::OutputControls;

pub fn list(messenger: &Messenger, user: &str, password: &str, output: &OutputControls) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    let blocked = messenger.list_blocked(&user)?;

    if output.json {
        output.print(&blocked);
    } else {
        if blocked.is_empty() {
            println!("No blocked users.");
            return Ok(());
        }

        println!("Blocked ({}):", blocked.len());
        println!("{}", "-".repeat(50));
        for login in &blocked {
            println!("{}", login);
        }
    }
    Ok(())
}

/// Block a user, dropping them from the contact list first if present.
pub fn block(
    messenger: &mut Messenger,
    user: &str,
    password: &str,
    target: &str,
    output: &OutputControls,
) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    let outcome = messenger.add_blocked(&user, target)?;

    if output.json {
        output.print(&outcome);
    } else {
        if outcome.removed_contact {
            println!("Contact has been deleted from contact list: {}", target);
        }
        println!("Contact added to blocked list: {}", target);
    }
    Ok(())
}

pub fn unblock(
    messenger: &mut Messenger,
    user: &str,
    password: &str,
    target: &str,
    output: &OutputControls,
) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    messenger.delete_blocked(&user, target)?;

    if output.json {
        output.print(&json!({ "success": true, "unblocked": target }));
    } else {
        println!("Contact has been deleted from block list: {}", target);
    }
    Ok(())
}

//! Account commands: create-user, login, profile.

use anyhow::{anyhow, Context, Result};
use serde_json::json;

use super::require_login;
use crate::messenger::Messenger;
use crate::output::OutputControls;

/// Create an account with empty contact and block lists.
pub fn create_user(
    messenger: &mut Messenger,
    login: &str,
    password: &str,
    phone: &str,
    output: &OutputControls,
) -> Result<()> {
    let account = messenger
        .create_account(login, password, phone)
        .with_context(|| format!("Failed to create user '{}'", login))?;

    if output.json {
        output.print(&account);
    } else {
        println!("User successfully created!");
    }
    Ok(())
}

/// Check credentials without doing anything else.
pub fn login(messenger: &Messenger, user: &str, password: &str, output: &OutputControls) -> Result<()> {
    let login = require_login(messenger, user, password)?;

    if output.json {
        output.print(&json!({ "success": true, "login": login }));
    } else {
        println!("Logged in as {}", login);
    }
    Ok(())
}

/// Show phone and list ids for an account.
pub fn profile(messenger: &Messenger, login: &str, output: &OutputControls) -> Result<()> {
    let profile = messenger
        .profile(login)?
        .ok_or_else(|| anyhow!("Not a user: '{}'", login))?;

    if output.json {
        output.print(&profile);
    } else {
        println!("Login:        {}", profile.login);
        println!("Phone:        {}", profile.phone);
        println!("Contact list: {}", profile.contact_list);
        println!("Block list:   {}", profile.block_list);
    }
    Ok(())
}

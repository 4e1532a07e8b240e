//! Contact commands: contacts, add-contact, delete-contact.

use anyhow::Result;
use serde_json::json;

use super::require_login;
use crate::messenger::Messenger;
use crate::output::OutputControls;

/// List the user's contacts.
pub fn list(messenger: &Messenger, user: &str, password: &str, output: &OutputControls) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    let contacts = messenger.list_contacts(&user)?;

    if output.json {
        output.print(&contacts);
    } else {
        if contacts.is_empty() {
            println!("No contacts found.");
            return Ok(());
        }

        println!("Contacts ({}):", contacts.len());
        println!("{}", "-".repeat(50));
        for contact in &contacts {
            println!("{}", contact);
        }
    }
    Ok(())
}

/// Add a contact (both directions).
pub fn add(
    messenger: &mut Messenger,
    user: &str,
    password: &str,
    target: &str,
    output: &OutputControls,
) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    messenger.add_contact(&user, target)?;

    if output.json {
        output.print(&json!({ "success": true, "contact": target }));
    } else {
        println!("Contact added: {}", target);
    }
    Ok(())
}

/// Delete a contact (both directions). Deleting a non-contact succeeds.
pub fn delete(
    messenger: &mut Messenger,
    user: &str,
    password: &str,
    target: &str,
    output: &OutputControls,
) -> Result<()> {
    let user = require_login(messenger, user, password)?;
    messenger.delete_contact(&user, target)?;

    if output.json {
        output.print(&json!({ "success": true, "deleted": target }));
    } else {
        println!("Contact has been deleted from contact list: {}", target);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> Messenger {
        let mut m = Messenger::open_in_memory().unwrap();
        m.create_account("alice", "pw1", "555-0001").unwrap();
        m.create_account("bob", "pw2", "555-0002").unwrap();
        m
    }

    #[test]
    fn test_add_requires_login() {
        let mut m = setup();
        let out = OutputControls::default();
        assert!(add(&mut m, "alice", "wrong", "bob", &out).is_err());
        assert!(m.list_contacts("alice").unwrap().is_empty());
    }

    #[test]
    fn test_add_then_delete() {
        let mut m = setup();
        let out = OutputControls::default();
        add(&mut m, "alice", "pw1", "bob", &out).unwrap();
        assert_eq!(m.list_contacts("bob").unwrap(), vec!["alice"]);

        delete(&mut m, "bob", "pw2", "alice", &out).unwrap();
        assert!(m.list_contacts("alice").unwrap().is_empty());
    }

    #[test]
    fn test_refusal_message_passes_through() {
        let mut m = setup();
        let err = add(&mut m, "alice", "pw1", "alice", &OutputControls::default()).unwrap_err();
        assert_eq!(err.to_string(), "You cannot add yourself!");
    }
}

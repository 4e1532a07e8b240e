//! Non-interactive command implementations.
//!
//! CHANGELOG:
//! - 10/16/2026 - Account, contact, block and chat commands
//! - 10/16/2026 - Initial module structure

pub mod accounts;
pub mod blocked;
pub mod chats;
pub mod contacts;

use anyhow::{anyhow, Result};

use crate::messenger::Messenger;

/// Authenticate before running a user-scoped command.
pub(crate) fn require_login(messenger: &Messenger, user: &str, password: &str) -> Result<String> {
    messenger
        .authenticate(user, password)?
        .ok_or_else(|| anyhow!("Login failed for '{}'", user))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_login() {
        let mut m = Messenger::open_in_memory().unwrap();
        m.create_account("alice", "pw1", "555-0001").unwrap();

        assert_eq!(require_login(&m, "alice", "pw1").unwrap(), "alice");
        let err = require_login(&m, "alice", "bad").unwrap_err();
        assert!(err.to_string().contains("Login failed"));
    }
}

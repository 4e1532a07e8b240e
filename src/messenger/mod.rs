//! Messenger service - one method per console action.
//!
//! Owns the single SQLite connection. Handlers that write more than one row
//! run inside a transaction; dropping it on an error path rolls back.
//!
//! CHANGELOG:
//! - 10/16/2026 - Transactions around multi-statement handlers
//! - 10/16/2026 - Initial implementation

mod accounts;
mod chats;
mod lists;

use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;

use crate::db::{connection, DataError};

/// Account created by [`Messenger::create_account`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub login: String,
    pub block_list: i64,
    pub contact_list: i64,
}

/// Public view of an account. The password is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub login: String,
    pub phone: String,
    pub contact_list: i64,
    pub block_list: i64,
}

/// Result of [`Messenger::add_blocked`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockOutcome {
    pub target: String,
    /// Target was on the acting user's contact list and got removed from it
    pub removed_contact: bool,
}

/// Rows written by [`Messenger::new_message`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentMessage {
    pub chat_id: i64,
    pub message_id: i64,
    pub recipient: String,
    pub timestamp: String,
}

/// What [`Messenger::list_chats`] surfaces: one chat in each direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatOverview {
    /// Most recent chat the user started
    pub initiated_chat: Option<i64>,
    pub members: Vec<String>,
    /// Most recent chat the user was added to
    pub joined_chat: Option<i64>,
    pub initiator: Option<String>,
}

/// Console messenger backed by one SQLite connection.
pub struct Messenger {
    conn: Connection,
}

impl Messenger {
    /// Wrap an existing connection. The schema must already be provisioned.
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the database file at `path`, provisioning the schema if needed.
    pub fn open(path: &Path) -> Result<Self, DataError> {
        Ok(Self::new(connection::open_db(path)?))
    }

    /// Private in-memory store.
    pub fn open_in_memory() -> Result<Self, DataError> {
        Ok(Self::new(connection::open_in_memory()?))
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, reporting any error SQLite raises on the way.
    pub fn close(self) -> Result<(), DataError> {
        self.conn.close().map_err(|(_, err)| DataError::from(err))
    }
}

/// Logins compare equal ignoring surrounding whitespace.
fn same_login(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// In-memory messenger with the given accounts (password `pw-<login>`).
    pub fn messenger_with(logins: &[&str]) -> Messenger {
        let mut m = Messenger::open_in_memory().unwrap();
        for (i, login) in logins.iter().enumerate() {
            m.create_account(login, &format!("pw-{}", login), &format!("555-{:04}", i))
                .unwrap();
        }
        m
    }

    pub fn count(m: &Messenger, sql: &str) -> i64 {
        m.connection().query_row(sql, [], |row| row.get(0)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_login_trims() {
        assert!(same_login("alice", " alice "));
        assert!(!same_login("alice", "alicia"));
    }

    #[test]
    fn test_open_and_close() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("m.db");
        let mut m = Messenger::open(&path).unwrap();
        m.create_account("alice", "pw", "555").unwrap();
        m.close().unwrap();

        let m = Messenger::open(&path).unwrap();
        assert_eq!(m.authenticate("alice", "pw").unwrap().as_deref(), Some("alice"));
    }
}

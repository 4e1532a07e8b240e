//! Schema provisioning for the messenger store.
//!
//! Lists and chats take their ids from AUTOINCREMENT counters so that
//! `sqlite_sequence` plays the role of a named sequence.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial schema (users, lists, chats, messages)

use rusqlite::Connection;
use tracing::debug;

use super::error::DataError;

/// Full schema, safe to apply to an already provisioned database.
///
/// Membership tables carry no uniqueness constraint: a login can land in the
/// same list or chat more than once.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS user_list (
    list_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    list_type  TEXT NOT NULL CHECK (list_type IN ('block', 'contact'))
);

CREATE TABLE IF NOT EXISTS usr (
    login         TEXT PRIMARY KEY,
    phone_num     TEXT,
    password      TEXT NOT NULL,
    block_list    INTEGER NOT NULL REFERENCES user_list(list_id),
    contact_list  INTEGER NOT NULL REFERENCES user_list(list_id)
);

CREATE TABLE IF NOT EXISTS user_list_contains (
    list_id      INTEGER NOT NULL REFERENCES user_list(list_id),
    list_member  TEXT NOT NULL REFERENCES usr(login)
);

CREATE TABLE IF NOT EXISTS chat (
    chat_id      INTEGER PRIMARY KEY AUTOINCREMENT,
    chat_type    TEXT NOT NULL,
    init_sender  TEXT NOT NULL REFERENCES usr(login)
);

CREATE TABLE IF NOT EXISTS chat_list (
    chat_id  INTEGER NOT NULL REFERENCES chat(chat_id),
    member   TEXT NOT NULL REFERENCES usr(login)
);

CREATE TABLE IF NOT EXISTS message (
    msg_id         INTEGER PRIMARY KEY AUTOINCREMENT,
    msg_text       TEXT NOT NULL,
    msg_timestamp  TEXT NOT NULL,
    sender_login   TEXT NOT NULL REFERENCES usr(login),
    chat_id        INTEGER NOT NULL REFERENCES chat(chat_id)
);

CREATE INDEX IF NOT EXISTS idx_user_list_contains_list ON user_list_contains(list_id);
CREATE INDEX IF NOT EXISTS idx_chat_list_member ON chat_list(member);
CREATE INDEX IF NOT EXISTS idx_message_chat ON message(chat_id);
"#;

/// Tables the data access layer depends on.
pub const TABLES: [&str; 6] = [
    "user_list",
    "usr",
    "user_list_contains",
    "chat",
    "chat_list",
    "message",
];

/// Enable foreign keys and create any missing table.
pub fn ensure_schema(conn: &Connection) -> Result<(), DataError> {
    conn.pragma_update(None, "foreign_keys", true)?;
    conn.execute_batch(SCHEMA)?;
    debug!(tables = TABLES.len(), "schema ensured");
    Ok(())
}

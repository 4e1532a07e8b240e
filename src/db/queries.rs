//! SQL statements for the messenger store.
//!
//! CHANGELOG:
//! - 10/16/2026 - Chat and message statements
//! - 10/16/2026 - Initial query constants (accounts, lists)

/// List type tag for a user's block list.
pub const LIST_TYPE_BLOCK: &str = "block";

/// List type tag for a user's contact list.
pub const LIST_TYPE_CONTACT: &str = "contact";

/// Chat type tag for one-to-one chats.
pub const CHAT_TYPE_PRIVATE: &str = "private";

/// Last value handed out by an AUTOINCREMENT counter.
/// Parameters: ?1 = table name
pub const CURRENT_SEQUENCE_VALUE: &str = r#"
SELECT seq FROM sqlite_sequence WHERE name = ?1
"#;

// ============================================================================
// ACCOUNT QUERIES
// ============================================================================

/// Parameters: ?1 = list type
pub const INSERT_LIST: &str = r#"
INSERT INTO user_list (list_type) VALUES (?1)
"#;

/// Parameters: ?1 = phone, ?2 = login, ?3 = password, ?4 = block list id, ?5 = contact list id
pub const INSERT_USER: &str = r#"
INSERT INTO usr (phone_num, login, password, block_list, contact_list)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

/// Parameters: ?1 = login, ?2 = password
pub const AUTHENTICATE: &str = r#"
SELECT * FROM usr WHERE login = ?1 AND password = ?2
"#;

/// Parameters: ?1 = login
pub const USER_EXISTS: &str = r#"
SELECT login FROM usr WHERE login = ?1
"#;

/// Parameters: ?1 = login
pub const USER_PROFILE: &str = r#"
SELECT login, phone_num, contact_list, block_list
FROM usr
WHERE login = ?1
"#;

// ============================================================================
// LIST QUERIES
// ============================================================================

/// Parameters: ?1 = login
pub const CONTACT_LIST_ID: &str = r#"
SELECT contact_list FROM usr WHERE login = ?1
"#;

/// Parameters: ?1 = login
pub const BLOCK_LIST_ID: &str = r#"
SELECT block_list FROM usr WHERE login = ?1
"#;

/// Is ?2 on the contact list owned by ?1.
pub const IN_CONTACT_LIST: &str = r#"
SELECT c.list_member
FROM user_list l, usr u, user_list_contains c
WHERE l.list_id = c.list_id
  AND u.contact_list = l.list_id
  AND l.list_type = 'contact'
  AND u.login = ?1
  AND c.list_member = ?2
"#;

/// Is ?2 on the block list owned by ?1.
pub const IN_BLOCK_LIST: &str = r#"
SELECT c.list_member
FROM user_list l, usr u, user_list_contains c
WHERE l.list_id = c.list_id
  AND u.block_list = l.list_id
  AND l.list_type = 'block'
  AND u.login = ?1
  AND c.list_member = ?2
"#;

/// Parameters: ?1 = list id, ?2 = member login
pub const INSERT_LIST_MEMBER: &str = r#"
INSERT INTO user_list_contains (list_id, list_member) VALUES (?1, ?2)
"#;

/// Parameters: ?1 = list id, ?2 = member login
pub const DELETE_LIST_MEMBER: &str = r#"
DELETE FROM user_list_contains WHERE list_id = ?1 AND list_member = ?2
"#;

/// Members of the contact list owned by ?1, in insertion order.
pub const CONTACT_MEMBERS: &str = r#"
SELECT c.list_member
FROM usr u, user_list_contains c
WHERE u.login = ?1
  AND u.contact_list = c.list_id
ORDER BY c.rowid
"#;

/// Members of the block list owned by ?1, in insertion order.
pub const BLOCK_MEMBERS: &str = r#"
SELECT c.list_member
FROM usr u, user_list_contains c
WHERE u.login = ?1
  AND u.block_list = c.list_id
ORDER BY c.rowid
"#;

// ============================================================================
// CHAT QUERIES
// ============================================================================

/// Parameters: ?1 = chat type, ?2 = initiating login
pub const INSERT_CHAT: &str = r#"
INSERT INTO chat (chat_type, init_sender) VALUES (?1, ?2)
"#;

/// Parameters: ?1 = chat id, ?2 = member login
pub const INSERT_CHAT_MEMBER: &str = r#"
INSERT INTO chat_list (chat_id, member) VALUES (?1, ?2)
"#;

/// Parameters: ?1 = text, ?2 = timestamp, ?3 = sender login, ?4 = chat id
pub const INSERT_MESSAGE: &str = r#"
INSERT INTO message (msg_text, msg_timestamp, sender_login, chat_id)
VALUES (?1, ?2, ?3, ?4)
"#;

/// Chats started by ?1, oldest first.
pub const CHATS_INITIATED_BY: &str = r#"
SELECT chat_id FROM chat WHERE init_sender = ?1 ORDER BY chat_id
"#;

/// Chats ?1 was added to, oldest first.
pub const CHATS_JOINED_BY: &str = r#"
SELECT chat_id FROM chat_list WHERE member = ?1 ORDER BY chat_id
"#;

/// Parameters: ?1 = chat id
pub const CHAT_MEMBERS: &str = r#"
SELECT l.member
FROM chat c, chat_list l
WHERE c.chat_id = ?1
  AND l.chat_id = c.chat_id
ORDER BY l.rowid
"#;

/// Parameters: ?1 = chat id
pub const CHAT_INITIATOR: &str = r#"
SELECT init_sender FROM chat WHERE chat_id = ?1
"#;

/// Messages in every chat ?1 started or belongs to, oldest first.
pub const USER_MESSAGES: &str = r#"
SELECT
    m.msg_id,
    m.chat_id,
    m.msg_timestamp,
    m.sender_login,
    m.msg_text
FROM message m
WHERE m.chat_id IN (
    SELECT chat_id FROM chat WHERE init_sender = ?1
    UNION
    SELECT chat_id FROM chat_list WHERE member = ?1
)
ORDER BY m.msg_id
"#;

//! Chat handlers: new message, chat overview, message history.

use chrono::Local;
use rusqlite::params;
use tracing::info;

use super::{ChatOverview, Messenger, SentMessage};
use crate::db::access::{self, Sequence, Table};
use crate::db::queries;
use crate::error::Result;

/// Timestamp layout stored with every message.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

impl Messenger {
    /// Start a new private chat with `recipient` holding one message.
    ///
    /// Every call opens a fresh chat, even between the same two users.
    pub fn new_message(&mut self, user: &str, recipient: &str, text: &str) -> Result<SentMessage> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let tx = self.conn.transaction()?;
        access::execute(&tx, queries::INSERT_CHAT, params![queries::CHAT_TYPE_PRIVATE, user])?;
        let chat_id = access::current_sequence_value(&tx, Sequence::Chat)?;
        access::execute(&tx, queries::INSERT_CHAT_MEMBER, params![chat_id, recipient])?;
        access::execute(&tx, queries::INSERT_MESSAGE, params![text, timestamp, user, chat_id])?;
        let message_id = access::current_sequence_value(&tx, Sequence::Message)?;
        tx.commit()?;

        info!(user, recipient, chat_id, message_id, "message sent");
        Ok(SentMessage {
            chat_id,
            message_id,
            recipient: recipient.to_string(),
            timestamp,
        })
    }

    /// Members of the latest chat `user` started, and the initiator of the
    /// latest chat `user` was added to.
    ///
    /// Older chats in either direction are not reported.
    pub fn list_chats(&self, user: &str) -> Result<ChatOverview> {
        let initiated =
            access::fetch_int(&self.conn, queries::CHATS_INITIATED_BY, params![user], "chat_id")?;
        let members =
            access::fetch_string_column(&self.conn, queries::CHAT_MEMBERS, params![initiated], "member")?;

        let joined =
            access::fetch_int(&self.conn, queries::CHATS_JOINED_BY, params![user], "chat_id")?;
        let initiator = access::fetch_string_column(
            &self.conn,
            queries::CHAT_INITIATOR,
            params![joined],
            "init_sender",
        )?
        .into_iter()
        .next();

        // Chat ids start at 1, so 0 means no row matched
        Ok(ChatOverview {
            initiated_chat: (initiated > 0).then_some(initiated),
            members,
            joined_chat: (joined > 0).then_some(joined),
            initiator,
        })
    }

    /// Every message in chats `user` started or belongs to, oldest first.
    pub fn chat_messages(&self, user: &str) -> Result<Table> {
        Ok(access::fetch_all_rows(&self.conn, queries::USER_MESSAGES, params![user])?)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{count, messenger_with};
    use super::*;
    use crate::error::MessengerError;

    #[test]
    fn test_new_message_writes_chat_member_and_message() {
        let mut m = messenger_with(&["alice", "bob"]);
        let sent = m.new_message("alice", "bob", "hello").unwrap();

        let (chat_type, init_sender): (String, String) = m
            .connection()
            .query_row(
                "SELECT chat_type, init_sender FROM chat WHERE chat_id = ?1",
                [sent.chat_id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(chat_type, "private");
        assert_eq!(init_sender, "alice");

        let members = access::fetch_string_column(
            m.connection(),
            queries::CHAT_MEMBERS,
            params![sent.chat_id],
            "member",
        )
        .unwrap();
        assert_eq!(members, vec!["bob"]);

        let (text, sender, chat_id, stamp): (String, String, i64, String) = m
            .connection()
            .query_row(
                "SELECT msg_text, sender_login, chat_id, msg_timestamp FROM message WHERE msg_id = ?1",
                [sent.message_id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
            )
            .unwrap();
        assert_eq!(text, "hello");
        assert_eq!(sender, "alice");
        assert_eq!(chat_id, sent.chat_id);
        assert_eq!(stamp, sent.timestamp);
        assert_eq!(count(&m, "SELECT COUNT(*) FROM message"), 1);
    }

    #[test]
    fn test_timestamp_format() {
        let mut m = messenger_with(&["alice", "bob"]);
        let sent = m.new_message("alice", "bob", "hi").unwrap();
        assert!(chrono::DateTime::parse_from_str(&sent.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_repeated_messages_open_new_chats() {
        let mut m = messenger_with(&["alice", "bob"]);
        let first = m.new_message("alice", "bob", "one").unwrap();
        let second = m.new_message("alice", "bob", "two").unwrap();

        assert_ne!(first.chat_id, second.chat_id);
        assert_eq!(count(&m, "SELECT COUNT(*) FROM chat"), 2);
    }

    #[test]
    fn test_message_to_unknown_user_rolls_back() {
        let mut m = messenger_with(&["alice"]);
        let err = m.new_message("alice", "ghost", "anyone?").unwrap_err();

        assert!(matches!(err, MessengerError::Data(_)));
        assert_eq!(count(&m, "SELECT COUNT(*) FROM chat"), 0);
        assert_eq!(count(&m, "SELECT COUNT(*) FROM message"), 0);
    }

    #[test]
    fn test_message_text_with_quotes_is_stored_verbatim() {
        let mut m = messenger_with(&["alice", "bob"]);
        let text = "it's fine'); DROP TABLE message; --";
        m.new_message("alice", "bob", text).unwrap();

        let table = m.chat_messages("bob").unwrap();
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][4], text);
    }

    #[test]
    fn test_list_chats_reports_one_chat_each_way() {
        let mut m = messenger_with(&["alice", "bob", "carol"]);
        m.new_message("alice", "bob", "hi bob").unwrap();
        let latest = m.new_message("alice", "carol", "hi carol").unwrap();
        m.new_message("bob", "alice", "hey").unwrap();

        let overview = m.list_chats("alice").unwrap();
        assert_eq!(overview.initiated_chat, Some(latest.chat_id));
        assert_eq!(overview.members, vec!["carol"]);
        assert_eq!(overview.initiator.as_deref(), Some("bob"));
    }

    #[test]
    fn test_list_chats_empty() {
        let m = messenger_with(&["alice"]);
        assert_eq!(m.list_chats("alice").unwrap(), ChatOverview::default());
    }

    #[test]
    fn test_chat_messages_both_directions() {
        let mut m = messenger_with(&["alice", "bob", "carol"]);
        m.new_message("alice", "bob", "first").unwrap();
        m.new_message("bob", "alice", "second").unwrap();
        m.new_message("carol", "bob", "unrelated").unwrap();

        let table = m.chat_messages("alice").unwrap();
        assert_eq!(
            table.columns,
            vec!["msg_id", "chat_id", "msg_timestamp", "sender_login", "msg_text"]
        );
        let texts: Vec<&str> = table.rows.iter().map(|r| r[4].as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }
}

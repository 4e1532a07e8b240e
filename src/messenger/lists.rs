//! Contact and block list handlers.
//!
//! Contacts are kept reciprocal by writing both sides; blocks are one-way.

use rusqlite::params;
use tracing::info;

use super::{same_login, BlockOutcome, Messenger};
use crate::db::access;
use crate::db::queries;
use crate::error::{MessengerError, Result};

impl Messenger {
    /// Add `target` to `user`'s contacts and `user` to `target`'s.
    ///
    /// Refused for self, unknown logins, blocked targets and existing contacts,
    /// in that order. Nothing is written when refused.
    pub fn add_contact(&mut self, user: &str, target: &str) -> Result<()> {
        if same_login(user, target) {
            return Err(MessengerError::SelfContact);
        }
        if !self.user_exists(target)? {
            return Err(MessengerError::NotAUser { login: target.to_string() });
        }
        if self.is_blocked(user, target)? {
            return Err(MessengerError::TargetBlocked { login: target.to_string() });
        }
        if self.is_contact(user, target)? {
            return Err(MessengerError::AlreadyContact { login: target.to_string() });
        }

        let tx = self.conn.transaction()?;
        let own_list = access::fetch_int(&tx, queries::CONTACT_LIST_ID, params![user], "contact_list")?;
        access::execute(&tx, queries::INSERT_LIST_MEMBER, params![own_list, target])?;
        let their_list =
            access::fetch_int(&tx, queries::CONTACT_LIST_ID, params![target], "contact_list")?;
        access::execute(&tx, queries::INSERT_LIST_MEMBER, params![their_list, user])?;
        tx.commit()?;

        info!(user, target, "contact added");
        Ok(())
    }

    pub fn list_contacts(&self, user: &str) -> Result<Vec<String>> {
        Ok(access::fetch_string_column(
            &self.conn,
            queries::CONTACT_MEMBERS,
            params![user],
            "list_member",
        )?)
    }

    /// Remove the pair from both contact lists. Absent rows are not an error.
    pub fn delete_contact(&mut self, user: &str, target: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        let own_list = access::fetch_int(&tx, queries::CONTACT_LIST_ID, params![user], "contact_list")?;
        let removed = access::execute(&tx, queries::DELETE_LIST_MEMBER, params![own_list, target])?;
        let their_list =
            access::fetch_int(&tx, queries::CONTACT_LIST_ID, params![target], "contact_list")?;
        let reciprocal = access::execute(&tx, queries::DELETE_LIST_MEMBER, params![their_list, user])?;
        tx.commit()?;

        info!(user, target, removed, reciprocal, "contact deleted");
        Ok(())
    }

    /// Put `target` on `user`'s block list, dropping it from `user`'s contacts
    /// first. `target`'s own lists are left alone.
    pub fn add_blocked(&mut self, user: &str, target: &str) -> Result<BlockOutcome> {
        if same_login(user, target) {
            return Err(MessengerError::SelfBlock);
        }
        if !self.user_exists(target)? {
            return Err(MessengerError::NotAUser { login: target.to_string() });
        }
        if self.is_blocked(user, target)? {
            return Err(MessengerError::AlreadyBlocked { login: target.to_string() });
        }

        let removed_contact = self.is_contact(user, target)?;

        let tx = self.conn.transaction()?;
        if removed_contact {
            let contact_list =
                access::fetch_int(&tx, queries::CONTACT_LIST_ID, params![user], "contact_list")?;
            access::execute(&tx, queries::DELETE_LIST_MEMBER, params![contact_list, target])?;
        }
        let block_list = access::fetch_int(&tx, queries::BLOCK_LIST_ID, params![user], "block_list")?;
        access::execute(&tx, queries::INSERT_LIST_MEMBER, params![block_list, target])?;
        tx.commit()?;

        info!(user, target, removed_contact, "user blocked");
        Ok(BlockOutcome {
            target: target.to_string(),
            removed_contact,
        })
    }

    pub fn list_blocked(&self, user: &str) -> Result<Vec<String>> {
        Ok(access::fetch_string_column(
            &self.conn,
            queries::BLOCK_MEMBERS,
            params![user],
            "list_member",
        )?)
    }

    /// Remove `target` from `user`'s block list. Absent rows are not an error.
    pub fn delete_blocked(&mut self, user: &str, target: &str) -> Result<()> {
        let block_list =
            access::fetch_int(&self.conn, queries::BLOCK_LIST_ID, params![user], "block_list")?;
        let removed = access::execute(&self.conn, queries::DELETE_LIST_MEMBER, params![block_list, target])?;

        info!(user, target, removed, "block removed");
        Ok(())
    }

    pub fn is_contact(&self, user: &str, target: &str) -> Result<bool> {
        Ok(access::exists(&self.conn, queries::IN_CONTACT_LIST, params![user, target])?)
    }

    pub fn is_blocked(&self, user: &str, target: &str) -> Result<bool> {
        Ok(access::exists(&self.conn, queries::IN_BLOCK_LIST, params![user, target])?)
    }
}

//! Account handlers: create, authenticate, profile.

use rusqlite::params;
use tracing::{debug, info};

use super::{Messenger, NewAccount, Profile};
use crate::db::access::{self, Sequence};
use crate::db::queries;
use crate::error::Result;

impl Messenger {
    /// Create a user together with its empty block and contact lists.
    ///
    /// A rejected user row (duplicate login) rolls the lists back too.
    pub fn create_account(&mut self, login: &str, password: &str, phone: &str) -> Result<NewAccount> {
        let tx = self.conn.transaction()?;

        access::execute(&tx, queries::INSERT_LIST, params![queries::LIST_TYPE_BLOCK])?;
        let block_list = access::current_sequence_value(&tx, Sequence::UserList)?;
        access::execute(&tx, queries::INSERT_LIST, params![queries::LIST_TYPE_CONTACT])?;
        let contact_list = access::current_sequence_value(&tx, Sequence::UserList)?;

        access::execute(
            &tx,
            queries::INSERT_USER,
            params![phone, login, password, block_list, contact_list],
        )?;
        tx.commit()?;

        info!(login, block_list, contact_list, "account created");
        Ok(NewAccount {
            login: login.to_string(),
            block_list,
            contact_list,
        })
    }

    /// Login of the matching account, or `None` when login/password do not match.
    pub fn authenticate(&self, login: &str, password: &str) -> Result<Option<String>> {
        let found = access::exists(&self.conn, queries::AUTHENTICATE, params![login, password])?;
        debug!(login, found, "authenticate");
        Ok(found.then(|| login.to_string()))
    }

    pub fn user_exists(&self, login: &str) -> Result<bool> {
        Ok(access::exists(&self.conn, queries::USER_EXISTS, params![login])?)
    }

    pub fn profile(&self, login: &str) -> Result<Option<Profile>> {
        let rows = access::fetch_rows(&self.conn, queries::USER_PROFILE, params![login])?;
        let Some(row) = rows.into_iter().next() else {
            return Ok(None);
        };

        let [login, phone, contact_list, block_list]: [String; 4] = match row.try_into() {
            Ok(fields) => fields,
            Err(_) => return Ok(None),
        };
        Ok(Some(Profile {
            login,
            phone,
            contact_list: contact_list.parse().unwrap_or(0),
            block_list: block_list.parse().unwrap_or(0),
        }))
    }
}

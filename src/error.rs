//! Handler errors.
//!
//! Refusals carry the operator-facing message as their `Display` text, so the
//! console can print any error as a single line.

use thiserror::Error;

use crate::db::DataError;

/// Main error type for messenger handlers.
#[derive(Error, Debug)]
pub enum MessengerError {
    /// Target login has no account
    #[error("Not a user")]
    NotAUser { login: String },

    #[error("You cannot add yourself!")]
    SelfContact,

    #[error("You cannot block yourself!")]
    SelfBlock,

    /// Target is on the acting user's block list
    #[error("User is in your blocked list. Cannot add to contacts until deleted from blocked list.")]
    TargetBlocked { login: String },

    #[error("User is already in your contact list.")]
    AlreadyContact { login: String },

    #[error("User is already in your blocked list.")]
    AlreadyBlocked { login: String },

    /// Backend failure; nothing the handler wrote survives it
    #[error(transparent)]
    Data(#[from] DataError),
}

impl MessengerError {
    /// True for a precondition refusal, false for a backend failure.
    pub fn is_refusal(&self) -> bool {
        !matches!(self, MessengerError::Data(_))
    }
}

impl From<rusqlite::Error> for MessengerError {
    fn from(err: rusqlite::Error) -> Self {
        MessengerError::Data(DataError::from(err))
    }
}

pub type Result<T> = std::result::Result<T, MessengerError>;

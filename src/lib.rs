//! messenger library
//!
//! Users with contact and block lists, private chats and messages, stored in
//! SQLite. Exposes modules for use by the binary and integration tests.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial library structure

// Core modules
pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod messenger;
pub mod output;
pub mod shell;

pub use error::MessengerError;
pub use messenger::Messenger;

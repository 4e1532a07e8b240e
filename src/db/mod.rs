//! Database module for the SQLite messenger store.
//!
//! CHANGELOG:
//! - 10/16/2026 - Data access layer over parameterized statements
//! - 10/16/2026 - Initial module structure

pub mod access;
pub mod connection;
pub mod error;
pub mod queries;
pub mod schema;

pub use access::{Sequence, Table};
pub use error::DataError;

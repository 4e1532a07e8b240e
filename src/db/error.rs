//! Errors surfaced by the data access layer.

use thiserror::Error;

/// Failure reported by the backend or while marshalling a result set.
#[derive(Error, Debug)]
pub enum DataError {
    /// Statement rejected by SQLite (syntax, constraint, I/O)
    #[error("database error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Requested column is not part of the result set
    #[error("column '{column}' not found in result set")]
    MissingColumn { column: String },

    /// Column value could not be read as an integer
    #[error("column '{column}' holds a non-integer value: {value}")]
    NotAnInteger { column: String, value: String },

    /// Database file or its directory could not be prepared
    #[error("cannot open database at {path}: {reason}")]
    Open { path: String, reason: String },
}

impl DataError {
    /// True when the backend refused the statement on a constraint (duplicate
    /// login, unknown foreign key, ...).
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            DataError::Sqlite {
                source: rusqlite::Error::SqliteFailure(err, _),
            } => err.code == rusqlite::ErrorCode::ConstraintViolation,
            _ => false,
        }
    }
}

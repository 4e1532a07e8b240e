//! SQLite connection management for the messenger store.
//!
//! CHANGELOG:
//! - 10/16/2026 - Create parent directory and provision schema on open
//! - 10/16/2026 - Initial stub

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::DataError;
use super::schema;

/// Default database path: `<data dir>/messenger/messenger.db`.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("messenger")
        .join("messenger.db")
}

/// Open (creating if missing) a read-write connection to the database file.
pub fn open_db(path: &Path) -> Result<Connection, DataError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| DataError::Open {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        }
    }

    let conn = Connection::open(path)?;
    schema::ensure_schema(&conn)?;
    info!(path = %path.display(), "database opened");
    Ok(conn)
}

/// Open a private in-memory database with the schema applied.
pub fn open_in_memory() -> Result<Connection, DataError> {
    let conn = Connection::open_in_memory()?;
    schema::ensure_schema(&conn)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path() {
        let path = default_db_path();
        assert!(path.ends_with("messenger/messenger.db"));
    }

    #[test]
    fn test_open_db_creates_parent_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("store.db");

        let conn = open_db(&path).unwrap();
        drop(conn);

        assert!(path.exists());
    }

    #[test]
    fn test_open_db_keeps_existing_rows() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("store.db");

        let conn = open_db(&path).unwrap();
        conn.execute("INSERT INTO user_list (list_type) VALUES ('contact')", [])
            .unwrap();
        drop(conn);

        let conn = open_db(&path).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM user_list", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }
}

//! Data access helpers - every statement the handlers issue goes through here.
//!
//! These functions accept `&Connection` so they run the same way on a plain
//! connection and inside a handler's `Transaction` (which derefs to one).
//! Values are always bound as parameters, never spliced into statement text.
//!
//! CHANGELOG:
//! - 10/16/2026 - Boolean `exists` predicate alongside the 0/1 row count
//! - 10/16/2026 - Initial extraction from the handlers

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OptionalExtension, Params, Row};
use serde::Serialize;
use tracing::debug;

use super::error::DataError;
use super::queries;

// ============================================================================
// Data Structures
// ============================================================================

/// Result set with its column header, every field rendered as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated lines; the header is printed once, and only if there is
    /// at least one row.
    pub fn render(&self) -> Vec<String> {
        if self.rows.is_empty() {
            return Vec::new();
        }
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.columns.join("\t"));
        lines.extend(self.rows.iter().map(|row| row.join("\t")));
        lines
    }
}

/// Backend counters used to hand out surrogate keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sequence {
    UserList,
    Chat,
    Message,
}

impl Sequence {
    /// Name of the counter row in `sqlite_sequence`.
    pub fn name(self) -> &'static str {
        match self {
            Sequence::UserList => "user_list",
            Sequence::Chat => "chat",
            Sequence::Message => "message",
        }
    }
}

// ============================================================================
// Statements
// ============================================================================

/// Run an insert/update/delete. Returns the number of affected rows.
pub fn execute<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<usize, DataError> {
    debug!(sql = sql.trim(), "execute");
    Ok(conn.execute(sql, params)?)
}

/// True when the query yields at least one row.
pub fn exists<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<bool, DataError> {
    debug!(sql = sql.trim(), "exists");
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    Ok(rows.next()?.is_some())
}

/// Presence check in integer form: 1 if any row matched, else 0.
///
/// This is not a row count.
pub fn count_rows<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<i64, DataError> {
    Ok(i64::from(exists(conn, sql, params)?))
}

/// Every row plus the column header.
pub fn fetch_all_rows<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Table, DataError> {
    debug!(sql = sql.trim(), "fetch_all_rows");
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let width = columns.len();

    let mut rows = stmt.query(params)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(row_to_strings(row, width)?);
    }

    Ok(Table { columns, rows: out })
}

/// Every row as a record of strings, for callers that iterate values.
pub fn fetch_rows<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Vec<String>>, DataError> {
    debug!(sql = sql.trim(), "fetch_rows");
    let mut stmt = conn.prepare(sql)?;
    let width = stmt.column_count();

    let mut rows = stmt.query(params)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(row_to_strings(row, width)?);
    }
    Ok(out)
}

/// Named integer column of the result.
///
/// No row yields 0, which is indistinguishable from a stored zero. With
/// several rows the last one wins.
pub fn fetch_int<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    column: &str,
) -> Result<i64, DataError> {
    debug!(sql = sql.trim(), column, "fetch_int");
    let mut stmt = conn.prepare(sql)?;
    let idx = column_index(&stmt, column)?;

    let mut rows = stmt.query(params)?;
    let mut value = 0;
    while let Some(row) = rows.next()? {
        value = value_to_int(row.get_ref(idx)?, column)?;
    }
    Ok(value)
}

/// Named column of every row, in result order.
pub fn fetch_string_column<P: Params>(
    conn: &Connection,
    sql: &str,
    params: P,
    column: &str,
) -> Result<Vec<String>, DataError> {
    debug!(sql = sql.trim(), column, "fetch_string_column");
    let mut stmt = conn.prepare(sql)?;
    let idx = column_index(&stmt, column)?;

    let mut rows = stmt.query(params)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next()? {
        out.push(value_to_string(row.get_ref(idx)?));
    }
    Ok(out)
}

/// Most recent value handed out by a sequence, or -1 if it has never fired.
///
/// Only meaningful on a connection nobody else writes through.
pub fn current_sequence_value(conn: &Connection, sequence: Sequence) -> Result<i64, DataError> {
    let value = conn
        .query_row(queries::CURRENT_SEQUENCE_VALUE, [sequence.name()], |row| {
            row.get::<_, i64>(0)
        })
        .optional()?;
    Ok(value.unwrap_or(-1))
}

// ============================================================================
// Utility Functions
// ============================================================================

fn column_index(stmt: &rusqlite::Statement<'_>, column: &str) -> Result<usize, DataError> {
    stmt.column_index(column)
        .map_err(|_| DataError::MissingColumn {
            column: column.to_string(),
        })
}

fn row_to_strings(row: &Row<'_>, width: usize) -> Result<Vec<String>, DataError> {
    (0..width)
        .map(|i| row.get_ref(i).map(value_to_string).map_err(DataError::from))
        .collect()
}

/// Render a field as text. NULL becomes `null`.
pub fn value_to_string(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "null".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) | ValueRef::Blob(t) => String::from_utf8_lossy(t).into_owned(),
    }
}

fn value_to_int(value: ValueRef<'_>, column: &str) -> Result<i64, DataError> {
    match value {
        ValueRef::Null => Ok(0),
        ValueRef::Integer(i) => Ok(i),
        other => {
            let text = value_to_string(other);
            text.trim().parse::<i64>().map_err(|_| DataError::NotAnInteger {
                column: column.to_string(),
                value: text,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connection::open_in_memory;
    use rusqlite::params;

    fn seeded() -> Connection {
        let conn = open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            INSERT INTO user_list (list_type) VALUES ('block'), ('contact');
            INSERT INTO usr (login, phone_num, password, block_list, contact_list)
                VALUES ('alice', '555-0001', 'pw1', 1, 2);
            INSERT INTO usr (login, phone_num, password, block_list, contact_list)
                VALUES ('bob', NULL, 'pw2', 1, 2);
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn test_execute_reports_affected_rows() {
        let conn = seeded();
        let n = execute(&conn, "UPDATE usr SET phone_num = ?1", params!["000"]).unwrap();
        assert_eq!(n, 2);
    }

    #[test]
    fn test_execute_surfaces_constraint_violation() {
        let conn = seeded();
        let err = execute(
            &conn,
            "INSERT INTO usr (login, password, block_list, contact_list) VALUES (?1, 'x', 1, 2)",
            params!["alice"],
        )
        .unwrap_err();
        assert!(err.is_constraint_violation());
    }

    #[test]
    fn test_exists_and_count_rows() {
        let conn = seeded();
        assert!(exists(&conn, "SELECT login FROM usr WHERE login = ?1", params!["bob"]).unwrap());
        assert!(!exists(&conn, "SELECT login FROM usr WHERE login = ?1", params!["eve"]).unwrap());

        // Presence, not the number of matches
        assert_eq!(count_rows(&conn, "SELECT login FROM usr", []).unwrap(), 1);
        assert_eq!(
            count_rows(&conn, "SELECT login FROM usr WHERE login = ?1", params!["eve"]).unwrap(),
            0
        );
    }

    #[test]
    fn test_fetch_all_rows_renders_header_once() {
        let conn = seeded();
        let table = fetch_all_rows(
            &conn,
            "SELECT login, phone_num FROM usr ORDER BY login",
            [],
        )
        .unwrap();

        assert_eq!(table.columns, vec!["login", "phone_num"]);
        assert_eq!(
            table.render(),
            vec!["login\tphone_num", "alice\t555-0001", "bob\tnull"]
        );
    }

    #[test]
    fn test_fetch_all_rows_empty_has_no_header_line() {
        let conn = seeded();
        let table = fetch_all_rows(&conn, "SELECT login FROM usr WHERE 0", []).unwrap();
        assert!(table.is_empty());
        assert!(table.render().is_empty());
        assert_eq!(table.columns, vec!["login"]);
    }

    #[test]
    fn test_fetch_rows() {
        let conn = seeded();
        let rows = fetch_rows(
            &conn,
            "SELECT login, block_list FROM usr WHERE login = ?1",
            params!["alice"],
        )
        .unwrap();
        assert_eq!(rows, vec![vec!["alice".to_string(), "1".to_string()]]);
    }

    #[test]
    fn test_fetch_int_no_row_is_zero() {
        let conn = seeded();
        let v = fetch_int(
            &conn,
            "SELECT contact_list FROM usr WHERE login = ?1",
            params!["eve"],
            "contact_list",
        )
        .unwrap();
        assert_eq!(v, 0);
    }

    #[test]
    fn test_fetch_int_last_row_wins() {
        let conn = seeded();
        let v = fetch_int(
            &conn,
            "SELECT list_id FROM user_list ORDER BY list_id",
            [],
            "list_id",
        )
        .unwrap();
        assert_eq!(v, 2);
    }

    #[test]
    fn test_fetch_int_rejects_text() {
        let conn = seeded();
        let err = fetch_int(
            &conn,
            "SELECT login FROM usr WHERE login = 'alice'",
            [],
            "login",
        )
        .unwrap_err();
        assert!(matches!(err, DataError::NotAnInteger { .. }));
    }

    #[test]
    fn test_fetch_int_unknown_column() {
        let conn = seeded();
        let err = fetch_int(&conn, "SELECT login FROM usr", [], "nope").unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { .. }));
    }

    #[test]
    fn test_fetch_string_column() {
        let conn = seeded();
        let logins =
            fetch_string_column(&conn, "SELECT * FROM usr ORDER BY login", [], "login").unwrap();
        assert_eq!(logins, vec!["alice", "bob"]);
    }

    #[test]
    fn test_current_sequence_value() {
        let conn = open_in_memory().unwrap();
        assert_eq!(current_sequence_value(&conn, Sequence::UserList).unwrap(), -1);

        execute(&conn, "INSERT INTO user_list (list_type) VALUES ('block')", []).unwrap();
        execute(&conn, "INSERT INTO user_list (list_type) VALUES ('contact')", []).unwrap();
        assert_eq!(current_sequence_value(&conn, Sequence::UserList).unwrap(), 2);
        assert_eq!(current_sequence_value(&conn, Sequence::Chat).unwrap(), -1);
    }

    #[test]
    fn test_sequence_survives_delete() {
        let conn = open_in_memory().unwrap();
        execute(&conn, "INSERT INTO user_list (list_type) VALUES ('block')", []).unwrap();
        execute(&conn, "DELETE FROM user_list", []).unwrap();
        execute(&conn, "INSERT INTO user_list (list_type) VALUES ('block')", []).unwrap();
        assert_eq!(current_sequence_value(&conn, Sequence::UserList).unwrap(), 2);
    }
}

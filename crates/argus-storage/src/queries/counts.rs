//! Table listing and row counts.

use argus_core::errors::StorageError;
use rusqlite::Connection;
use serde::Serialize;

use crate::schema::Dialect;

/// Row count of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCount {
    pub table: String,
    pub rows: usize,
}

/// User tables in the database, sorted by name. SQLite's internal tables
/// (`sqlite_sequence` and friends) are excluded.
pub fn table_names(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let mut stmt = conn
        .prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name",
        )
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

pub fn count_rows(conn: &Connection, table: &str) -> Result<usize, StorageError> {
    let sql = format!("SELECT COUNT(*) FROM {}", Dialect::Sqlite.quote(table));
    let count: i64 = conn
        .query_row(&sql, [], |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: format!("count {table}: {e}"),
        })?;
    Ok(count as usize)
}

/// Row counts for every user table.
pub fn table_counts(conn: &Connection) -> Result<Vec<TableCount>, StorageError> {
    table_names(conn)?
        .into_iter()
        .map(|table| {
            let rows = count_rows(conn, &table)?;
            Ok(TableCount { table, rows })
        })
        .collect()
}

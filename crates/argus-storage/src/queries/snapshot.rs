//! Full-table reads, used to compare database states.

use argus_core::errors::StorageError;
use rusqlite::types::Value;
use rusqlite::Connection;

use crate::schema::Dialect;

/// Every row of `table` ordered by its first column, as raw SQLite values.
pub fn table_snapshot(conn: &Connection, table: &str) -> Result<Vec<Vec<Value>>, StorageError> {
    let sql = format!("SELECT * FROM {} ORDER BY 1", Dialect::Sqlite.quote(table));
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;
    let width = stmt.column_count();

    let rows = stmt
        .query_map([], |row| (0..width).map(|i| row.get::<_, Value>(i)).collect())
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| StorageError::SqliteError { message: e.to_string() })
}

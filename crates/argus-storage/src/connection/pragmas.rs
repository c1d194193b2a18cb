//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode, NORMAL sync, foreign_keys ON, 5s busy_timeout.

use argus_core::errors::StorageError;
use rusqlite::Connection;

/// Apply safety pragmas to a connection. Foreign keys must be on for the
/// engine to reject orphaned rows at insert time.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA foreign_keys = ON;
        PRAGMA busy_timeout = 5000;
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: format!("failed to apply pragmas: {e}"),
    })
}

/// Toggle foreign key enforcement. Has no effect inside a transaction.
pub fn set_foreign_keys(conn: &Connection, enabled: bool) -> Result<(), StorageError> {
    conn.pragma_update(None, "foreign_keys", enabled)
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to set foreign_keys: {e}"),
        })
}

/// Whether foreign key enforcement is currently on.
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool, StorageError> {
    let enabled: i64 = conn
        .pragma_query_value(None, "foreign_keys", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;
    Ok(enabled == 1)
}

//! Fixture inserts with constraint-aware error classification.

use argus_core::errors::StorageError;
use rusqlite::{ffi, params_from_iter, Connection, ErrorCode};

use crate::schema::{Dialect, Schema, SqlValue, TableDef, TableRow};

/// Map an engine error from a write against `table` to a `StorageError`.
pub fn classify(table: &str, err: rusqlite::Error) -> StorageError {
    let table = table.to_string();
    match err {
        rusqlite::Error::SqliteFailure(code, message) if code.code == ErrorCode::ConstraintViolation => {
            let message = message.unwrap_or_else(|| code.to_string());
            match code.extended_code {
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => StorageError::ForeignKeyViolation { table, message },
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    StorageError::DuplicateKey { table, message }
                }
                _ => StorageError::ConstraintViolation { table, message },
            }
        }
        other => StorageError::SqliteError {
            message: format!("{table}: {other}"),
        },
    }
}

/// Insert rows into `table` with one prepared statement. Returns the number
/// of rows written.
pub fn insert_rows(
    conn: &Connection,
    table: &TableDef,
    rows: &[Vec<SqlValue>],
) -> Result<usize, StorageError> {
    let sql = Dialect::Sqlite.insert_statement(table);
    let mut stmt = conn.prepare(&sql).map_err(|e| classify(table.name, e))?;

    for row in rows {
        stmt.execute(params_from_iter(row.iter()))
            .map_err(|e| classify(table.name, e))?;
    }
    Ok(rows.len())
}

/// Insert a single typed row into its table.
pub fn insert_row<R: TableRow>(conn: &Connection, schema: &Schema, row: &R) -> Result<(), StorageError> {
    let table = schema.table(R::TABLE).ok_or_else(|| StorageError::SqliteError {
        message: format!("no such table in schema: {}", R::TABLE),
    })?;
    insert_rows(conn, table, &[row.values()])?;
    Ok(())
}

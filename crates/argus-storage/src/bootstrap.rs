//! Schema bootstrap: drop every user table, recreate the schema and load
//! the fixture rows.
//!
//! Destructive by contract. Running it twice against the same database
//! yields the same end state.

use std::time::Instant;

use argus_core::errors::StorageError;
use argus_core::models::SchemaVariant;
use rusqlite::Connection;
use serde::Serialize;

use crate::connection::pragmas::{foreign_keys_enabled, set_foreign_keys};
use crate::connection::writer::with_immediate_transaction;
use crate::connection::RadarDatabase;
use crate::fixtures::{FixtureCounts, FixtureSet};
use crate::queries::{insert_rows, table_names};
use crate::schema::{Dialect, Schema};

/// Outcome of one bootstrap run.
#[derive(Debug, Clone, Serialize)]
pub struct BootstrapReport {
    pub variant: SchemaVariant,
    /// Tables that existed before the run and were dropped.
    pub dropped: Vec<String>,
    pub counts: FixtureCounts,
    pub duration_ms: u64,
}

/// Bootstrap `variant` with its stock fixtures.
pub fn bootstrap(conn: &Connection, variant: SchemaVariant) -> Result<BootstrapReport, StorageError> {
    let schema = Schema::for_variant(variant);
    let fixtures = FixtureSet::for_variant(variant);
    bootstrap_with(conn, &schema, &fixtures)
}

/// Bootstrap `schema` with a caller-provided fixture set.
///
/// Table creation and inserts share one `BEGIN IMMEDIATE` transaction, so a
/// failed insert leaves no tables behind. The drop phase runs before it,
/// outside any transaction, because `PRAGMA foreign_keys` is a no-op inside
/// one.
pub fn bootstrap_with(
    conn: &Connection,
    schema: &Schema,
    fixtures: &FixtureSet,
) -> Result<BootstrapReport, StorageError> {
    let start = Instant::now();
    let variant = schema.variant();
    tracing::info!(%variant, "bootstrapping radar schema");

    let dropped = drop_user_tables(conn)?;
    if !foreign_keys_enabled(conn)? {
        return Err(StorageError::SqliteError {
            message: "foreign key enforcement is off; refusing to load fixtures".to_string(),
        });
    }

    with_immediate_transaction(conn, |tx| {
        for table in schema.tables() {
            tx.execute_batch(&Dialect::Sqlite.create_table(table))
                .map_err(|e| StorageError::SchemaFailed {
                    table: table.name.to_string(),
                    message: e.to_string(),
                })?;
            tracing::debug!(table = table.name, "created table");
        }

        for (name, rows) in fixtures.rows_by_table() {
            let table = schema.table(name).ok_or_else(|| StorageError::SchemaFailed {
                table: name.to_string(),
                message: "table missing from schema".to_string(),
            })?;
            let written = insert_rows(tx, table, &rows)?;
            tracing::info!(table = name, rows = written, "inserted fixtures");
        }
        Ok(())
    })?;

    let duration_ms = start.elapsed().as_millis() as u64;
    tracing::info!(%variant, duration_ms, "bootstrap complete");

    Ok(BootstrapReport {
        variant,
        dropped,
        counts: fixtures.counts(),
        duration_ms,
    })
}

/// Drop every user table with foreign keys off, so order does not matter
/// and tables from a previous variant go too. Enforcement is restored even
/// when a drop fails.
fn drop_user_tables(conn: &Connection) -> Result<Vec<String>, StorageError> {
    let existing = table_names(conn)?;
    if existing.is_empty() {
        return Ok(existing);
    }

    set_foreign_keys(conn, false)?;
    let dropped = existing.iter().try_for_each(|table| {
        conn.execute_batch(&Dialect::Sqlite.drop_table(table))
            .map_err(|e| StorageError::SqliteError {
                message: format!("drop {table}: {e}"),
            })
    });
    set_foreign_keys(conn, true)?;
    dropped?;

    tracing::info!(tables = existing.len(), "dropped existing tables");
    Ok(existing)
}

impl RadarDatabase {
    /// Bootstrap this database with the stock fixtures for `variant`.
    pub fn bootstrap(&self, variant: SchemaVariant) -> Result<BootstrapReport, StorageError> {
        self.with_conn(|conn| bootstrap(conn, variant))
    }
}

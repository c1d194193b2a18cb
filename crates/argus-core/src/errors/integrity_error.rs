//! Integrity errors: fixture data that breaks the data model's invariants.

use super::error_code::{self, ArgusErrorCode};

/// Errors reported by integrity verification of a bootstrapped database or
/// an in-memory fixture set.
#[derive(Debug, thiserror::Error)]
pub enum IntegrityError {
    #[error("{count} row(s) in {table}.{column} reference a missing {parent} row (first: {first_id})")]
    OrphanedReference {
        table: String,
        column: String,
        parent: String,
        count: usize,
        first_id: i64,
    },

    #[error("Group {group_id} has {count} permission rows")]
    DuplicatePermission { group_id: i64, count: usize },

    #[error("Foreign key check reported {count} violation(s)")]
    ForeignKeyCheck { count: usize },

    #[error("Row count mismatch in {table}: expected {expected}, found {actual}")]
    RowCountMismatch {
        table: String,
        expected: usize,
        actual: usize,
    },
}

impl ArgusErrorCode for IntegrityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RowCountMismatch { .. } => error_code::ROW_COUNT_MISMATCH,
            _ => error_code::INTEGRITY_ERROR,
        }
    }
}

//! Storage errors.

use super::error_code::{self, ArgusErrorCode};

/// Errors raised while talking to the database engine or the filesystem
/// underneath it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Foreign key violation in {table}: {message}")]
    ForeignKeyViolation { table: String, message: String },

    #[error("Duplicate key in {table}: {message}")]
    DuplicateKey { table: String, message: String },

    #[error("Constraint violation in {table}: {message}")]
    ConstraintViolation { table: String, message: String },

    #[error("Failed to create table {table}: {message}")]
    SchemaFailed { table: String, message: String },

    #[error("I/O error at {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to serialize {target}: {message}")]
    Serialization { target: String, message: String },
}

impl StorageError {
    /// True for any engine-enforced constraint failure.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::ForeignKeyViolation { .. }
                | Self::DuplicateKey { .. }
                | Self::ConstraintViolation { .. }
        )
    }
}

impl ArgusErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ForeignKeyViolation { .. } => error_code::FOREIGN_KEY_VIOLATION,
            Self::DuplicateKey { .. } => error_code::DUPLICATE_KEY,
            Self::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
            Self::SqliteError { .. } | Self::SchemaFailed { .. } => error_code::STORAGE_ERROR,
        }
    }
}

//! Bootstrap errors: aggregate of every subsystem a bootstrap run touches.

use super::{ArgusErrorCode, ConfigError, IntegrityError, StorageError};

/// Errors that can occur during a bootstrap, provisioning, or export run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ArgusErrorCode for BootstrapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Integrity(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

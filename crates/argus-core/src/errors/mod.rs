//! Error handling for Argus.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod bootstrap_error;
pub mod config_error;
pub mod error_code;
pub mod integrity_error;
pub mod storage_error;

pub use bootstrap_error::BootstrapError;
pub use config_error::ConfigError;
pub use error_code::ArgusErrorCode;
pub use integrity_error::IntegrityError;
pub use storage_error::StorageError;

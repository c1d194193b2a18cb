//! ArgusErrorCode trait: stable error code strings.

/// Every error enum implements this to expose a structured code string
/// alongside its display message.
pub trait ArgusErrorCode {
    /// Returns the code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const FOREIGN_KEY_VIOLATION: &str = "FOREIGN_KEY_VIOLATION";
pub const DUPLICATE_KEY: &str = "DUPLICATE_KEY";
pub const CONSTRAINT_VIOLATION: &str = "CONSTRAINT_VIOLATION";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INTEGRITY_ERROR: &str = "INTEGRITY_ERROR";
pub const ROW_COUNT_MISMATCH: &str = "ROW_COUNT_MISMATCH";

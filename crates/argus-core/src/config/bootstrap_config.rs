//! Bootstrap configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DATABASE_NAME;
use crate::models::SchemaVariant;

/// Configuration for a bootstrap run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Schema variant: `baseline` or `expanded`. Default: `expanded`.
    pub variant: Option<String>,
    /// Database name used by rendered scripts and station stores.
    /// Default: `radar_db`.
    pub database_name: Option<String>,
    /// Run integrity verification after bootstrapping. Default: true.
    pub verify: Option<bool>,
}

impl BootstrapConfig {
    /// Returns the effective variant. An unparseable value falls back to the
    /// default; `ArgusConfig::validate` rejects it before this is reached.
    pub fn effective_variant(&self) -> SchemaVariant {
        self.variant
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the effective database name, defaulting to `radar_db`.
    pub fn effective_database_name(&self) -> String {
        self.database_name
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string())
    }

    /// Returns whether to verify after bootstrapping, defaulting to true.
    pub fn effective_verify(&self) -> bool {
        self.verify.unwrap_or(true)
    }
}

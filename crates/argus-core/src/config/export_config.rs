//! Script export configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTPUT_DIR;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory that receives rendered scripts. Default: `out`.
    pub output_dir: Option<String>,
}

impl ExportConfig {
    pub fn effective_output_dir(&self) -> PathBuf {
        PathBuf::from(self.output_dir.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR))
    }
}

//! Per-station store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DATA_DIR, DEFAULT_STATION_COUNT, DEFAULT_STATION_PREFIX};

/// Configuration for provisioning one store per radar station.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StationConfig {
    /// Root directory holding the station stores. Default: `db`.
    pub data_dir: Option<String>,
    /// Number of stations to provision. Default: 3.
    pub count: Option<u32>,
    /// Directory prefix per station. Default: `radar`.
    pub directory_prefix: Option<String>,
}

impl StationConfig {
    pub fn effective_data_dir(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }

    pub fn effective_count(&self) -> u32 {
        self.count.unwrap_or(DEFAULT_STATION_COUNT)
    }

    pub fn effective_directory_prefix(&self) -> String {
        self.directory_prefix
            .clone()
            .unwrap_or_else(|| DEFAULT_STATION_PREFIX.to_string())
    }
}

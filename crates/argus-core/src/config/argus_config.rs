//! Top-level Argus configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BootstrapConfig, ExportConfig, StationConfig};
use crate::constants::{MAX_STATION_COUNT, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;
use crate::models::SchemaVariant;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ARGUS_*`)
/// 3. Project config (`argus.toml` in the project root)
/// 4. User config (`~/.argus/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArgusConfig {
    pub bootstrap: BootstrapConfig,
    pub stations: StationConfig,
    pub export: ExportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub variant: Option<String>,
    pub database_name: Option<String>,
    pub data_dir: Option<String>,
    pub station_count: Option<u32>,
    pub output_dir: Option<String>,
}

impl ArgusConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(err @ ConfigError::ParseError { .. }) => return Err(err),
                    Err(err) => {
                        tracing::warn!(error = %err, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            variant = %config.bootstrap.effective_variant(),
            database = %config.bootstrap.effective_database_name(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ArgusConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ArgusConfig) -> Result<(), ConfigError> {
        if let Some(ref variant) = config.bootstrap.variant {
            variant.parse::<SchemaVariant>()?;
        }
        if let Some(ref name) = config.bootstrap.database_name {
            let valid = !name.is_empty()
                && name
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
                && !name.starts_with(|c: char| c.is_ascii_digit());
            if !valid {
                return Err(ConfigError::ValidationFailed {
                    field: "bootstrap.database_name".to_string(),
                    message: "must be a non-empty identifier of [A-Za-z0-9_]".to_string(),
                });
            }
        }
        if let Some(count) = config.stations.count {
            if !(1..=MAX_STATION_COUNT).contains(&count) {
                return Err(ConfigError::ValidationFailed {
                    field: "stations.count".to_string(),
                    message: format!("must be between 1 and {MAX_STATION_COUNT}"),
                });
            }
        }
        if let Some(ref prefix) = config.stations.directory_prefix {
            if prefix.is_empty() || prefix.contains(['/', '\\']) {
                return Err(ConfigError::ValidationFailed {
                    field: "stations.directory_prefix".to_string(),
                    message: "must be a non-empty single path component".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.argus/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ArgusConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ArgusConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ArgusConfig, other: &ArgusConfig) {
        // Bootstrap
        if other.bootstrap.variant.is_some() {
            base.bootstrap.variant = other.bootstrap.variant.clone();
        }
        if other.bootstrap.database_name.is_some() {
            base.bootstrap.database_name = other.bootstrap.database_name.clone();
        }
        if other.bootstrap.verify.is_some() {
            base.bootstrap.verify = other.bootstrap.verify;
        }

        // Stations
        if other.stations.data_dir.is_some() {
            base.stations.data_dir = other.stations.data_dir.clone();
        }
        if other.stations.count.is_some() {
            base.stations.count = other.stations.count;
        }
        if other.stations.directory_prefix.is_some() {
            base.stations.directory_prefix = other.stations.directory_prefix.clone();
        }

        // Export
        if other.export.output_dir.is_some() {
            base.export.output_dir = other.export.output_dir.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ARGUS_VARIANT`, `ARGUS_STATION_COUNT`, etc.
    fn apply_env_overrides(config: &mut ArgusConfig) {
        if let Ok(val) = std::env::var("ARGUS_VARIANT") {
            config.bootstrap.variant = Some(val);
        }
        if let Ok(val) = std::env::var("ARGUS_DATABASE_NAME") {
            config.bootstrap.database_name = Some(val);
        }
        if let Ok(val) = std::env::var("ARGUS_VERIFY") {
            if let Ok(v) = val.parse::<bool>() {
                config.bootstrap.verify = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARGUS_DATA_DIR") {
            config.stations.data_dir = Some(val);
        }
        if let Ok(val) = std::env::var("ARGUS_STATION_COUNT") {
            if let Ok(v) = val.parse::<u32>() {
                config.stations.count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARGUS_OUTPUT_DIR") {
            config.export.output_dir = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ArgusConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.variant {
            config.bootstrap.variant = Some(v.clone());
        }
        if let Some(ref v) = cli.database_name {
            config.bootstrap.database_name = Some(v.clone());
        }
        if let Some(ref v) = cli.data_dir {
            config.stations.data_dir = Some(v.clone());
        }
        if let Some(v) = cli.station_count {
            config.stations.count = Some(v);
        }
        if let Some(ref v) = cli.output_dir {
            config.export.output_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level config directory: `~/.argus/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".argus"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

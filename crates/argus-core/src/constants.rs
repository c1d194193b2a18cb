//! Shared constants for the Argus schema bootstrap.

/// Argus version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default database name, shared by the relational and document forms.
pub const DEFAULT_DATABASE_NAME: &str = "radar_db";

/// Default schema variant.
pub const DEFAULT_VARIANT: &str = "expanded";

/// Default root directory for per-station stores.
pub const DEFAULT_DATA_DIR: &str = "db";

/// Default directory prefix for per-station stores (`radar1`, `radar2`, ...).
pub const DEFAULT_STATION_PREFIX: &str = "radar";

/// Default number of provisioned radar stations.
pub const DEFAULT_STATION_COUNT: u32 = 3;

/// Upper bound on provisioned radar stations.
pub const MAX_STATION_COUNT: u32 = 16;

/// Default directory for exported scripts.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Radar station id meaning "not assigned to any station".
pub const UNASSIGNED_STATION: u32 = 0;

/// Project config file name looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "argus.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "ARGUS_LOG";

/// Timestamp layout used for SQL literals and SQLite TEXT columns.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

//! Configuration system for Argus.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod argus_config;
pub mod bootstrap_config;
pub mod export_config;
pub mod station_config;

pub use argus_config::{ArgusConfig, CliOverrides};
pub use bootstrap_config::BootstrapConfig;
pub use export_config::ExportConfig;
pub use station_config::StationConfig;

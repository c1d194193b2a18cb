//! Tests for the Argus configuration system.

use std::sync::Mutex;

use argus_core::config::{ArgusConfig, CliOverrides};
use argus_core::errors::ConfigError;
use argus_core::models::SchemaVariant;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all ARGUS_ env vars to prevent cross-test contamination.
fn clear_argus_env_vars() {
    for key in [
        "ARGUS_VARIANT",
        "ARGUS_DATABASE_NAME",
        "ARGUS_VERIFY",
        "ARGUS_DATA_DIR",
        "ARGUS_STATION_COUNT",
        "ARGUS_OUTPUT_DIR",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn layered_resolution_cli_over_env_over_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_argus_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("argus.toml"),
        r#"
[bootstrap]
variant = "baseline"
database_name = "project_db"

[stations]
count = 2
"#,
    )
    .unwrap();

    std::env::set_var("ARGUS_STATION_COUNT", "5");
    std::env::set_var("ARGUS_DATABASE_NAME", "env_db");

    let cli = CliOverrides {
        database_name: Some("cli_db".to_string()),
        ..Default::default()
    };
    let config = ArgusConfig::load(dir.path(), Some(&cli)).unwrap();

    assert_eq!(config.bootstrap.effective_variant(), SchemaVariant::Baseline);
    assert_eq!(config.bootstrap.effective_database_name(), "cli_db");
    assert_eq!(config.stations.effective_count(), 5);

    clear_argus_env_vars();
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_argus_env_vars();

    let dir = tempdir();
    let config = ArgusConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.bootstrap.effective_variant(), SchemaVariant::Expanded);
    assert_eq!(config.bootstrap.effective_database_name(), "radar_db");
    assert!(config.bootstrap.effective_verify());
    assert_eq!(config.stations.effective_count(), 3);
    assert_eq!(config.stations.effective_directory_prefix(), "radar");
    assert_eq!(config.stations.effective_data_dir(), std::path::PathBuf::from("db"));
    assert_eq!(config.export.effective_output_dir(), std::path::PathBuf::from("out"));
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_argus_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("argus.toml"), "[bootstrap\nvariant = ").unwrap();

    match ArgusConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("expected ParseError, got: {other:?}"),
    }
}

#[test]
fn unknown_variant_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_argus_env_vars();

    let dir = tempdir();
    std::env::set_var("ARGUS_VARIANT", "document");

    match ArgusConfig::load(dir.path(), None) {
        Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "bootstrap.variant"),
        other => panic!("expected InvalidValue, got: {other:?}"),
    }

    clear_argus_env_vars();
}

#[test]
fn station_count_out_of_range_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_argus_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        station_count: Some(0),
        ..Default::default()
    };

    match ArgusConfig::load(dir.path(), Some(&cli)) {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "stations.count"),
        other => panic!("expected ValidationFailed, got: {other:?}"),
    }
}

#[test]
fn database_name_must_be_an_identifier() {
    for bad in ["", "radar-db", "1radar", "radar db"] {
        let toml = format!("[bootstrap]\ndatabase_name = \"{bad}\"\n");
        assert!(
            matches!(
                ArgusConfig::from_toml(&toml),
                Err(ConfigError::ValidationFailed { .. })
            ),
            "'{bad}' should be rejected"
        );
    }
    assert!(ArgusConfig::from_toml("[bootstrap]\ndatabase_name = \"radar_db2\"\n").is_ok());
}

#[test]
fn unrecognized_keys_are_accepted() {
    let config = ArgusConfig::from_toml(
        r#"
[bootstrap]
variant = "expanded"
replicas = 3

[future_section]
key = 1
"#,
    )
    .unwrap();
    assert_eq!(config.bootstrap.effective_variant(), SchemaVariant::Expanded);
}

#[test]
fn toml_round_trip_preserves_values() {
    let config = ArgusConfig::from_toml(
        r#"
[stations]
data_dir = "/srv/radar"
count = 4
"#,
    )
    .unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = ArgusConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.stations.effective_count(), 4);
    assert_eq!(reparsed.stations.data_dir.as_deref(), Some("/srv/radar"));
}

//! Per-station store provisioning: wipe and recreate one SQLite database
//! per radar station under a shared data directory.

use std::path::{Path, PathBuf};

use argus_core::config::ArgusConfig;
use argus_core::errors::{BootstrapError, ConfigError};
use argus_core::models::{RadarStation, SchemaVariant};
use serde::Serialize;

use crate::bootstrap::BootstrapReport;
use crate::connection::RadarDatabase;
use crate::export::io_err;
use crate::fixtures::FixtureCounts;
use crate::integrity::check_database;
use crate::schema::Schema;

/// Where and what to provision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationPlan {
    pub data_dir: PathBuf,
    pub count: u32,
    pub directory_prefix: String,
    pub database_name: String,
    pub variant: SchemaVariant,
    /// Run integrity checks on each store after bootstrapping it.
    pub verify: bool,
}

impl StationPlan {
    /// Build a plan from resolved configuration. A relative data directory
    /// is taken relative to `root`.
    pub fn from_config(config: &ArgusConfig, root: &Path) -> Self {
        let data_dir = config.stations.effective_data_dir();
        Self {
            data_dir: if data_dir.is_absolute() {
                data_dir
            } else {
                root.join(data_dir)
            },
            count: config.stations.effective_count(),
            directory_prefix: config.stations.effective_directory_prefix(),
            database_name: config.bootstrap.effective_database_name(),
            variant: config.bootstrap.effective_variant(),
            verify: config.bootstrap.effective_verify(),
        }
    }

    pub fn stations(&self) -> impl Iterator<Item = RadarStation> {
        (1..=self.count).map(RadarStation)
    }

    /// `<data_dir>/<prefix><n>`
    pub fn station_dir(&self, station: RadarStation) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", self.directory_prefix, station.id()))
    }

    /// `<data_dir>/<prefix><n>/<database_name>.sqlite`
    pub fn database_path(&self, station: RadarStation) -> PathBuf {
        self.station_dir(station)
            .join(format!("{}.sqlite", self.database_name))
    }
}

/// One provisioned station.
#[derive(Debug, Clone, Serialize)]
pub struct StationStore {
    pub station: RadarStation,
    pub directory: PathBuf,
    pub database: PathBuf,
    pub report: BootstrapReport,
}

/// Remove and recreate every station directory in `plan`, then bootstrap a
/// fresh database in each. Stops at the first failing station.
pub fn recreate_station_stores(plan: &StationPlan) -> Result<Vec<StationStore>, BootstrapError> {
    if plan.count == 0 {
        return Err(ConfigError::ValidationFailed {
            field: "stations.count".to_string(),
            message: "at least one station is required".to_string(),
        }
        .into());
    }

    let schema = Schema::for_variant(plan.variant);
    let expected = FixtureCounts::for_variant(plan.variant);
    let mut stores = Vec::with_capacity(plan.count as usize);

    for station in plan.stations() {
        let directory = plan.station_dir(station);
        if directory.exists() {
            std::fs::remove_dir_all(&directory).map_err(|e| io_err(&directory, e))?;
            tracing::info!(%station, path = %directory.display(), "removed station directory");
        }
        std::fs::create_dir_all(&directory).map_err(|e| io_err(&directory, e))?;
        tracing::info!(%station, path = %directory.display(), "created station directory");

        let database = plan.database_path(station);
        let db = RadarDatabase::open(&database)?;
        let report = db.bootstrap(plan.variant)?;

        if plan.verify {
            let integrity = db.with_conn(|conn| check_database(conn, &schema))?;
            integrity.ensure_consistent()?;
            integrity.ensure_counts(&expected)?;
            tracing::debug!(%station, "station store verified");
        }

        tracing::info!(
            %station,
            database = %database.display(),
            rows = report.counts.total(),
            "station store ready"
        );
        stores.push(StationStore {
            station,
            directory,
            database,
            report,
        });
    }

    Ok(stores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_data_dir_resolves_against_root() {
        let config = ArgusConfig::default();
        let plan = StationPlan::from_config(&config, Path::new("/srv/argus"));
        assert_eq!(plan.data_dir, PathBuf::from("/srv/argus/db"));
        assert_eq!(
            plan.database_path(RadarStation(2)),
            PathBuf::from("/srv/argus/db/radar2/radar_db.sqlite")
        );
        assert_eq!(plan.stations().count(), 3);
    }
}

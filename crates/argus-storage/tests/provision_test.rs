//! Tests for per-station store provisioning.

use std::path::Path;

use argus_core::models::{RadarStation, SchemaVariant};
use argus_storage::provision::{recreate_station_stores, StationPlan};
use argus_storage::queries::count_rows;
use argus_storage::RadarDatabase;

fn plan(data_dir: &Path, count: u32) -> StationPlan {
    StationPlan {
        data_dir: data_dir.to_path_buf(),
        count,
        directory_prefix: "radar".to_string(),
        database_name: "radar_db".to_string(),
        variant: SchemaVariant::Expanded,
        verify: true,
    }
}

#[test]
fn provisions_one_store_per_station() {
    let dir = tempfile::TempDir::new().unwrap();
    let stores = recreate_station_stores(&plan(dir.path(), 3)).unwrap();

    assert_eq!(stores.len(), 3);
    for (store, n) in stores.iter().zip(1..) {
        assert_eq!(store.station, RadarStation(n));
        assert_eq!(store.directory, dir.path().join(format!("radar{n}")));
        assert!(store.database.is_file());

        let db = RadarDatabase::open(&store.database).unwrap();
        let groups = db.with_conn(|conn| count_rows(conn, "USER_GROUP")).unwrap();
        assert_eq!(groups, 32);
    }
}

#[test]
fn stale_station_contents_are_wiped() {
    let dir = tempfile::TempDir::new().unwrap();
    let stale = dir.path().join("radar1").join("stale.log");
    std::fs::create_dir_all(stale.parent().unwrap()).unwrap();
    std::fs::write(&stale, "old").unwrap();

    recreate_station_stores(&plan(dir.path(), 1)).unwrap();
    assert!(!stale.exists());
    assert!(dir.path().join("radar1/radar_db.sqlite").is_file());
}

#[test]
fn zero_stations_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(recreate_station_stores(&plan(dir.path(), 0)).is_err());
}

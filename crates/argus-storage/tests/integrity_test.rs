//! Tests for integrity verification against bootstrapped databases.

use argus_core::errors::IntegrityError;
use argus_core::models::SchemaVariant;
use argus_storage::connection::pragmas::set_foreign_keys;
use argus_storage::integrity::check_database;
use argus_storage::{FixtureCounts, RadarDatabase, Schema};

fn bootstrapped(variant: SchemaVariant) -> RadarDatabase {
    let db = RadarDatabase::open_in_memory().unwrap();
    db.bootstrap(variant).unwrap();
    db
}

#[test]
fn fresh_bootstrap_is_clean_for_both_variants() {
    for variant in SchemaVariant::ALL {
        let db = bootstrapped(variant);
        let schema = Schema::for_variant(variant);
        let report = db.with_conn(|conn| check_database(conn, &schema)).unwrap();

        assert!(report.is_clean(), "{variant}: {report:?}");
        report.ensure_consistent().unwrap();
        report.ensure_counts(&FixtureCounts::for_variant(variant)).unwrap();
    }
}

#[test]
fn expanded_report_carries_row_counts() {
    let db = bootstrapped(SchemaVariant::Expanded);
    let schema = Schema::for_variant(SchemaVariant::Expanded);
    let report = db.with_conn(|conn| check_database(conn, &schema)).unwrap();

    assert_eq!(report.rows("USER_GROUP"), Some(32));
    assert_eq!(report.rows("USER_ACCOUNT"), Some(37));
    assert_eq!(report.rows("PERMISSION"), Some(32));
    assert_eq!(report.rows("RADAR_DETECTION"), Some(50));
    assert_eq!(report.rows("AUDIT_LOG"), Some(31));
}

#[test]
fn duplicate_permission_rows_are_reported() {
    let db = bootstrapped(SchemaVariant::Expanded);
    let schema = Schema::for_variant(SchemaVariant::Expanded);

    // The schema does not forbid a second row for the same group.
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO PERMISSION (group_id, can_select, can_insert, can_update, can_delete)
             VALUES (5, 1, 0, 0, 0)",
            [],
        )
        .unwrap();
        Ok(())
    })
    .unwrap();

    let report = db.with_conn(|conn| check_database(conn, &schema)).unwrap();
    assert_eq!(report.duplicate_permissions.len(), 1);
    assert_eq!(report.duplicate_permissions[0].group_id, 5);
    assert!(matches!(
        report.ensure_consistent(),
        Err(IntegrityError::DuplicatePermission { group_id: 5, count: 2 })
    ));
}

#[test]
fn rows_smuggled_past_enforcement_are_caught() {
    let db = bootstrapped(SchemaVariant::Baseline);
    let schema = Schema::for_variant(SchemaVariant::Baseline);

    db.with_conn(|conn| {
        set_foreign_keys(conn, false)?;
        conn.execute(
            "INSERT INTO USER_ACCOUNT (group_id, username, password_hash, radar_station)
             VALUES (999, 'ghost', 'x', 1)",
            [],
        )
        .unwrap();
        set_foreign_keys(conn, true)
    })
    .unwrap();

    let report = db.with_conn(|conn| check_database(conn, &schema)).unwrap();
    assert_eq!(report.foreign_key_violations, 1);
    let accounts = report
        .orphans
        .iter()
        .find(|s| s.table == "USER_ACCOUNT")
        .unwrap();
    assert_eq!(accounts.ids, vec![7]);

    match report.ensure_consistent() {
        Err(IntegrityError::OrphanedReference { table, count, first_id, .. }) => {
            assert_eq!(table, "USER_ACCOUNT");
            assert_eq!(count, 1);
            assert_eq!(first_id, 7);
        }
        other => panic!("expected orphaned reference, got {other:?}"),
    }
    assert!(report
        .ensure_counts(&FixtureCounts::for_variant(SchemaVariant::Baseline))
        .is_err());
}

#[test]
fn audit_rows_for_missing_users_are_caught() {
    let db = bootstrapped(SchemaVariant::Expanded);
    let schema = Schema::for_variant(SchemaVariant::Expanded);

    db.with_conn(|conn| {
        set_foreign_keys(conn, false)?;
        conn.execute(
            "INSERT INTO AUDIT_LOG (timestamp, user_id, operation, radar_station, table_name, description)
             VALUES ('2025-03-14 12:00:00', 999, 'SELECT', 1, 'RADAR_DETECTION', 'ghost read')",
            [],
        )
        .unwrap();
        set_foreign_keys(conn, true)
    })
    .unwrap();

    let report = db.with_conn(|conn| check_database(conn, &schema)).unwrap();
    assert_eq!(report.foreign_key_violations, 1);
    let audit = report
        .orphans
        .iter()
        .find(|s| s.table == "AUDIT_LOG")
        .unwrap();
    assert_eq!(audit.column, "user_id");
    assert_eq!(audit.parent, "USER_ACCOUNT");
    assert_eq!(audit.ids, vec![32]);
    assert!(report
        .orphans
        .iter()
        .filter(|s| s.table != "AUDIT_LOG")
        .all(|s| s.ids.is_empty()));

    match report.ensure_consistent() {
        Err(IntegrityError::OrphanedReference { table, column, first_id, .. }) => {
            assert_eq!(table, "AUDIT_LOG");
            assert_eq!(column, "user_id");
            assert_eq!(first_id, 32);
        }
        other => panic!("expected orphaned reference, got {other:?}"),
    }
}

#[test]
fn missing_tables_surface_as_storage_errors() {
    let db = RadarDatabase::open_in_memory().unwrap();
    let schema = Schema::for_variant(SchemaVariant::Expanded);
    assert!(db.with_conn(|conn| check_database(conn, &schema)).is_err());
}

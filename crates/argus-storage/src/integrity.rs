//! Integrity verification of a bootstrapped database or an in-memory
//! fixture set.
//!
//! Both checks produce the same `IntegrityReport`, so a document export can
//! be held to the rules the relational engine enforces.

use std::collections::{BTreeMap, HashSet};

use argus_core::errors::{IntegrityError, StorageError};
use rusqlite::Connection;
use serde::Serialize;

use crate::fixtures::{FixtureCounts, FixtureSet};
use crate::queries::{count_rows, TableCount};
use crate::schema::{
    Dialect, Schema, AUDIT_LOG, PERMISSION, RADAR_DETECTION, USER_ACCOUNT, USER_GROUP,
};

/// Child rows whose reference column points at a missing parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanSet {
    pub table: String,
    pub column: String,
    pub parent: String,
    /// Primary keys of the orphaned child rows, ascending.
    pub ids: Vec<i64>,
}

/// A group holding more than one permission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PermissionDuplicate {
    pub group_id: i64,
    pub rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrityReport {
    pub row_counts: Vec<TableCount>,
    pub orphans: Vec<OrphanSet>,
    pub duplicate_permissions: Vec<PermissionDuplicate>,
    pub groups_without_permission: Vec<i64>,
    /// Rows reported by `PRAGMA foreign_key_check`. Always 0 for fixtures.
    pub foreign_key_violations: usize,
}

impl IntegrityReport {
    /// Fail on the first hard violation: orphaned references, duplicate
    /// permission rows, or foreign key check failures. Groups without a
    /// permission row are logged, not failed.
    pub fn ensure_consistent(&self) -> Result<(), IntegrityError> {
        for warning in self.warnings() {
            tracing::warn!("{warning}");
        }

        if let Some(set) = self.orphans.iter().find(|s| !s.ids.is_empty()) {
            return Err(IntegrityError::OrphanedReference {
                table: set.table.clone(),
                column: set.column.clone(),
                parent: set.parent.clone(),
                count: set.ids.len(),
                first_id: set.ids[0],
            });
        }
        if let Some(dup) = self.duplicate_permissions.first() {
            return Err(IntegrityError::DuplicatePermission {
                group_id: dup.group_id,
                count: dup.rows,
            });
        }
        if self.foreign_key_violations > 0 {
            return Err(IntegrityError::ForeignKeyCheck {
                count: self.foreign_key_violations,
            });
        }
        Ok(())
    }

    /// Fail when any table's row count differs from `expected`.
    pub fn ensure_counts(&self, expected: &FixtureCounts) -> Result<(), IntegrityError> {
        for count in &self.row_counts {
            if let Some(want) = expected.for_table(&count.table) {
                if want != count.rows {
                    return Err(IntegrityError::RowCountMismatch {
                        table: count.table.clone(),
                        expected: want,
                        actual: count.rows,
                    });
                }
            }
        }
        Ok(())
    }

    /// Soft findings that do not fail verification.
    pub fn warnings(&self) -> Vec<String> {
        self.groups_without_permission
            .iter()
            .map(|id| format!("group {id} has no permission row"))
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.orphans.iter().all(|s| s.ids.is_empty())
            && self.duplicate_permissions.is_empty()
            && self.groups_without_permission.is_empty()
            && self.foreign_key_violations == 0
    }

    pub fn rows(&self, table: &str) -> Option<usize> {
        self.row_counts
            .iter()
            .find(|c| c.table == table)
            .map(|c| c.rows)
    }
}

fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::SqliteError {
        message: e.to_string(),
    }
}

fn query_ids(conn: &Connection, sql: &str) -> Result<Vec<i64>, StorageError> {
    let mut stmt = conn.prepare(sql).map_err(sqlite_err)?;
    let rows = stmt
        .query_map([], |row| row.get::<_, i64>(0))
        .map_err(sqlite_err)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(sqlite_err)
}

/// Inspect a bootstrapped database. Every table in `schema` must exist.
pub fn check_database(conn: &Connection, schema: &Schema) -> Result<IntegrityReport, StorageError> {
    let q = |ident: &str| Dialect::Sqlite.quote(ident);
    let mut report = IntegrityReport::default();

    for table in schema.tables() {
        report.row_counts.push(TableCount {
            table: table.name.to_string(),
            rows: count_rows(conn, table.name)?,
        });
    }

    for table in schema.tables() {
        let pk = table.primary_key().name;
        for (column, fk) in table.foreign_keys() {
            let sql = format!(
                "SELECT c.{pk} FROM {child} c LEFT JOIN {parent} p ON c.{col} = p.{ppk}
                 WHERE p.{ppk} IS NULL ORDER BY c.{pk}",
                pk = q(pk),
                child = q(table.name),
                parent = q(fk.table),
                col = q(column.name),
                ppk = q(fk.column),
            );
            report.orphans.push(OrphanSet {
                table: table.name.to_string(),
                column: column.name.to_string(),
                parent: fk.table.to_string(),
                ids: query_ids(conn, &sql)?,
            });
        }
    }

    let group_pk = schema
        .table(USER_GROUP)
        .map(|t| t.primary_key().name)
        .unwrap_or("group_id");

    let mut stmt = conn
        .prepare(&format!(
            "SELECT group_id, COUNT(*) FROM {} GROUP BY group_id HAVING COUNT(*) > 1 ORDER BY group_id",
            q(PERMISSION)
        ))
        .map_err(sqlite_err)?;
    report.duplicate_permissions = stmt
        .query_map([], |row| {
            Ok(PermissionDuplicate {
                group_id: row.get(0)?,
                rows: row.get::<_, i64>(1)? as usize,
            })
        })
        .map_err(sqlite_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(sqlite_err)?;

    report.groups_without_permission = query_ids(
        conn,
        &format!(
            "SELECT g.{gpk} FROM {groups} g
             WHERE NOT EXISTS (SELECT 1 FROM {perms} p WHERE p.group_id = g.{gpk})
             ORDER BY g.{gpk}",
            gpk = q(group_pk),
            groups = q(USER_GROUP),
            perms = q(PERMISSION),
        ),
    )?;

    let mut stmt = conn.prepare("PRAGMA foreign_key_check").map_err(sqlite_err)?;
    let mut rows = stmt.query([]).map_err(sqlite_err)?;
    while rows.next().map_err(sqlite_err)?.is_some() {
        report.foreign_key_violations += 1;
    }

    tracing::debug!(
        orphans = report.orphans.iter().map(|s| s.ids.len()).sum::<usize>(),
        duplicates = report.duplicate_permissions.len(),
        fk_violations = report.foreign_key_violations,
        "checked database integrity"
    );
    Ok(report)
}

/// Apply the same checks to a fixture set before it is written anywhere.
pub fn check_fixtures(fixtures: &FixtureSet) -> IntegrityReport {
    let counts = fixtures.counts();
    let row_counts = [
        (USER_GROUP, counts.groups),
        (USER_ACCOUNT, counts.accounts),
        (PERMISSION, counts.permissions),
        (RADAR_DETECTION, counts.detections),
        (AUDIT_LOG, counts.audit_entries),
    ]
    .into_iter()
    .map(|(table, rows)| TableCount {
        table: table.to_string(),
        rows,
    })
    .collect();

    let group_ids: HashSet<i64> = fixtures.groups.iter().map(|g| g.id).collect();
    let account_ids: HashSet<i64> = fixtures.accounts.iter().map(|a| a.id).collect();

    let orphans = |table: &str, column: &str, parent: &str, ids: Vec<i64>| {
        let mut ids = ids;
        ids.sort_unstable();
        OrphanSet {
            table: table.to_string(),
            column: column.to_string(),
            parent: parent.to_string(),
            ids,
        }
    };

    let mut per_group: BTreeMap<i64, usize> = BTreeMap::new();
    for p in &fixtures.permissions {
        *per_group.entry(p.group_id).or_default() += 1;
    }

    let mut groups_without_permission: Vec<i64> = group_ids
        .iter()
        .copied()
        .filter(|id| !per_group.contains_key(id))
        .collect();
    groups_without_permission.sort_unstable();

    IntegrityReport {
        row_counts,
        orphans: vec![
            orphans(
                USER_ACCOUNT,
                "group_id",
                USER_GROUP,
                fixtures
                    .accounts
                    .iter()
                    .filter(|a| !group_ids.contains(&a.group_id))
                    .map(|a| a.id)
                    .collect(),
            ),
            orphans(
                PERMISSION,
                "group_id",
                USER_GROUP,
                fixtures
                    .permissions
                    .iter()
                    .filter(|p| !group_ids.contains(&p.group_id))
                    .map(|p| p.id)
                    .collect(),
            ),
            orphans(
                AUDIT_LOG,
                "user_id",
                USER_ACCOUNT,
                fixtures
                    .audit_log
                    .iter()
                    .filter(|e| !account_ids.contains(&e.user_id))
                    .map(|e| e.id)
                    .collect(),
            ),
        ],
        duplicate_permissions: per_group
            .into_iter()
            .filter(|(_, rows)| *rows > 1)
            .map(|(group_id, rows)| PermissionDuplicate { group_id, rows })
            .collect(),
        groups_without_permission,
        foreign_key_violations: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::models::{Capabilities, Permission, SchemaVariant};

    #[test]
    fn stock_fixtures_are_consistent() {
        for variant in SchemaVariant::ALL {
            let report = check_fixtures(&FixtureSet::for_variant(variant));
            assert!(report.is_clean(), "{variant}: {report:?}");
            report.ensure_counts(&FixtureCounts::for_variant(variant)).unwrap();
        }
    }

    #[test]
    fn duplicate_permission_fails_consistency() {
        let mut set = FixtureSet::for_variant(SchemaVariant::Baseline);
        set.permissions.push(Permission {
            id: 99,
            group_id: 1,
            capabilities: Capabilities::READ_ONLY,
        });
        let err = check_fixtures(&set).ensure_consistent().unwrap_err();
        assert!(matches!(
            err,
            IntegrityError::DuplicatePermission { group_id: 1, count: 2 }
        ));
    }

    #[test]
    fn missing_permission_is_only_a_warning() {
        let mut set = FixtureSet::for_variant(SchemaVariant::Baseline);
        set.permissions.retain(|p| p.group_id != 4);
        let report = check_fixtures(&set);
        assert_eq!(report.groups_without_permission, vec![4]);
        assert_eq!(report.warnings().len(), 1);
        report.ensure_consistent().unwrap();
    }

    #[test]
    fn audit_entry_for_unknown_user_is_orphaned() {
        for variant in SchemaVariant::ALL {
            let mut set = FixtureSet::for_variant(variant);
            let last = set.audit_log.len() - 1;
            set.audit_log[last].user_id = 999;
            let orphan_id = set.audit_log[last].id;

            let report = check_fixtures(&set);
            assert!(!report.is_clean(), "{variant}");
            match report.ensure_consistent() {
                Err(IntegrityError::OrphanedReference { table, parent, count, first_id, .. }) => {
                    assert_eq!(table, AUDIT_LOG);
                    assert_eq!(parent, USER_ACCOUNT);
                    assert_eq!(count, 1);
                    assert_eq!(first_id, orphan_id);
                }
                other => panic!("{variant}: expected orphaned reference, got {other:?}"),
            }
        }
    }

    #[test]
    fn count_mismatch_names_the_table() {
        let mut set = FixtureSet::for_variant(SchemaVariant::Expanded);
        set.detections.pop();
        let err = check_fixtures(&set)
            .ensure_counts(&FixtureCounts::for_variant(SchemaVariant::Expanded))
            .unwrap_err();
        assert!(matches!(
            err,
            IntegrityError::RowCountMismatch { ref table, expected: 50, actual: 49 } if table == RADAR_DETECTION
        ));
    }
}

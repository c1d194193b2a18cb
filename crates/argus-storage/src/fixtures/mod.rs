//! Fixture data: the literal rows every bootstrap inserts.

pub mod audit_trail;
pub mod baseline;
pub mod expanded;
pub mod tracks;

use argus_core::models::{
    AuditLogEntry, Permission, RadarDetection, SchemaVariant, UserAccount, UserGroup,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::schema::{
    SqlValue, TableRow, AUDIT_LOG, PERMISSION, RADAR_DETECTION, USER_ACCOUNT, USER_GROUP,
};

/// All rows for one variant, grouped by table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixtureSet {
    pub groups: Vec<UserGroup>,
    pub accounts: Vec<UserAccount>,
    pub permissions: Vec<Permission>,
    pub detections: Vec<RadarDetection>,
    pub audit_log: Vec<AuditLogEntry>,
}

impl FixtureSet {
    pub fn for_variant(variant: SchemaVariant) -> Self {
        match variant {
            SchemaVariant::Baseline => baseline::fixtures(),
            SchemaVariant::Expanded => expanded::fixtures(),
        }
    }

    pub fn counts(&self) -> FixtureCounts {
        FixtureCounts {
            groups: self.groups.len(),
            accounts: self.accounts.len(),
            permissions: self.permissions.len(),
            detections: self.detections.len(),
            audit_entries: self.audit_log.len(),
        }
    }

    /// Rows per table, in table creation order.
    pub fn rows_by_table(&self) -> Vec<(&'static str, Vec<Vec<SqlValue>>)> {
        vec![
            (USER_GROUP, rows(&self.groups)),
            (USER_ACCOUNT, rows(&self.accounts)),
            (PERMISSION, rows(&self.permissions)),
            (RADAR_DETECTION, rows(&self.detections)),
            (AUDIT_LOG, rows(&self.audit_log)),
        ]
    }
}

fn rows<R: TableRow>(items: &[R]) -> Vec<Vec<SqlValue>> {
    items.iter().map(TableRow::values).collect()
}

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FixtureCounts {
    pub groups: usize,
    pub accounts: usize,
    pub permissions: usize,
    pub detections: usize,
    pub audit_entries: usize,
}

impl FixtureCounts {
    /// The literal row counts each variant's bootstrap must produce.
    pub const fn for_variant(variant: SchemaVariant) -> Self {
        match variant {
            SchemaVariant::Baseline => Self {
                groups: 4,
                accounts: 6,
                permissions: 4,
                detections: 20,
                audit_entries: 10,
            },
            SchemaVariant::Expanded => Self {
                groups: 32,
                accounts: 37,
                permissions: 32,
                detections: 50,
                audit_entries: 31,
            },
        }
    }

    /// Expected count for a table name, if the table is known.
    pub fn for_table(&self, table: &str) -> Option<usize> {
        match table {
            USER_GROUP => Some(self.groups),
            USER_ACCOUNT => Some(self.accounts),
            PERMISSION => Some(self.permissions),
            RADAR_DETECTION => Some(self.detections),
            AUDIT_LOG => Some(self.audit_entries),
            _ => None,
        }
    }

    pub fn total(&self) -> usize {
        self.groups + self.accounts + self.permissions + self.detections + self.audit_entries
    }
}

/// Opaque credential digest: BLAKE3 of `username:secret`, hex encoded.
pub fn credential_hash(username: &str, secret: &str) -> String {
    blake3::hash(format!("{username}:{secret}").as_bytes())
        .to_hex()
        .to_string()
}

/// `at(h, m, s)` on the fixture day, 2025-03-14.
pub(crate) fn fixture_time(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 14)
        .and_then(|d| d.and_hms_opt(hour, minute, second))
        .unwrap_or_default()
}

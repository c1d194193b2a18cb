//! Mapping from domain models to table rows.
//!
//! Values are positional and follow the column order in `tables::build`,
//! which is the same for both variants.

use argus_core::models::{AuditLogEntry, Permission, RadarDetection, UserAccount, UserGroup};

use super::tables::{AUDIT_LOG, PERMISSION, RADAR_DETECTION, USER_ACCOUNT, USER_GROUP};
use super::SqlValue;

pub trait TableRow {
    const TABLE: &'static str;

    /// Primary key value.
    fn id(&self) -> i64;

    /// Cell values in column order.
    fn values(&self) -> Vec<SqlValue>;
}

impl TableRow for UserGroup {
    const TABLE: &'static str = USER_GROUP;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            SqlValue::text(&self.name),
            SqlValue::text(&self.description),
        ]
    }
}

impl TableRow for UserAccount {
    const TABLE: &'static str = USER_ACCOUNT;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            SqlValue::Integer(self.group_id),
            SqlValue::text(&self.username),
            SqlValue::text(&self.password_hash),
            SqlValue::Integer(i64::from(self.radar_station.id())),
        ]
    }
}

impl TableRow for Permission {
    const TABLE: &'static str = PERMISSION;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        let caps = self.capabilities;
        vec![
            SqlValue::Integer(self.id),
            SqlValue::Integer(self.group_id),
            SqlValue::Boolean(caps.can_select),
            SqlValue::Boolean(caps.can_insert),
            SqlValue::Boolean(caps.can_update),
            SqlValue::Boolean(caps.can_delete),
        ]
    }
}

impl TableRow for RadarDetection {
    const TABLE: &'static str = RADAR_DETECTION;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            SqlValue::Integer(i64::from(self.radar_id)),
            SqlValue::Timestamp(self.timestamp),
            SqlValue::Real(self.position.x),
            SqlValue::Real(self.position.y),
            SqlValue::Real(self.position.z),
            SqlValue::Real(self.reflection_rate),
        ]
    }
}

impl TableRow for AuditLogEntry {
    const TABLE: &'static str = AUDIT_LOG;

    fn id(&self) -> i64 {
        self.id
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Integer(self.id),
            SqlValue::Timestamp(self.timestamp),
            SqlValue::Integer(self.user_id),
            SqlValue::text(self.operation.as_str()),
            SqlValue::Integer(i64::from(self.radar_station.id())),
            SqlValue::text(&self.table_name),
            SqlValue::text(&self.description),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use crate::fixtures::FixtureSet;
    use argus_core::models::SchemaVariant;

    #[test]
    fn row_width_matches_table_width() {
        let schema = Schema::for_variant(SchemaVariant::Expanded);
        let fixtures = FixtureSet::for_variant(SchemaVariant::Expanded);
        let width = |name: &str| schema.table(name).unwrap().columns.len();

        assert_eq!(fixtures.groups[0].values().len(), width(USER_GROUP));
        assert_eq!(fixtures.accounts[0].values().len(), width(USER_ACCOUNT));
        assert_eq!(fixtures.permissions[0].values().len(), width(PERMISSION));
        assert_eq!(fixtures.detections[0].values().len(), width(RADAR_DETECTION));
        assert_eq!(fixtures.audit_log[0].values().len(), width(AUDIT_LOG));
    }
}

//! The five radar tables and their per-variant key naming.

use argus_core::models::SchemaVariant;

use super::{ColumnDef, ColumnType, TableDef};

pub const USER_GROUP: &str = "USER_GROUP";
pub const USER_ACCOUNT: &str = "USER_ACCOUNT";
pub const PERMISSION: &str = "PERMISSION";
pub const RADAR_DETECTION: &str = "RADAR_DETECTION";
pub const AUDIT_LOG: &str = "AUDIT_LOG";

/// Primary key column names. The baseline layout keys every table on `_id`;
/// the expanded layout names each key after its entity.
struct KeyNames {
    group: &'static str,
    account: &'static str,
    permission: &'static str,
    detection: &'static str,
    log: &'static str,
}

impl KeyNames {
    fn for_variant(variant: SchemaVariant) -> Self {
        match variant {
            SchemaVariant::Baseline => Self {
                group: "_id",
                account: "_id",
                permission: "_id",
                detection: "_id",
                log: "_id",
            },
            SchemaVariant::Expanded => Self {
                group: "group_id",
                account: "user_id",
                permission: "permission_id",
                detection: "detection_id",
                log: "log_id",
            },
        }
    }
}

/// Build the tables for `variant` in creation order.
pub(crate) fn build(variant: SchemaVariant) -> Vec<TableDef> {
    let keys = KeyNames::for_variant(variant);

    vec![
        TableDef {
            name: USER_GROUP,
            columns: vec![
                ColumnDef::primary_key(keys.group),
                ColumnDef::new("group_name", ColumnType::Varchar(64)),
                ColumnDef::new("description", ColumnType::Text),
            ],
        },
        TableDef {
            name: USER_ACCOUNT,
            columns: vec![
                ColumnDef::primary_key(keys.account),
                ColumnDef::foreign_key("group_id", USER_GROUP, keys.group),
                ColumnDef::new("username", ColumnType::Varchar(64)),
                ColumnDef::new("password_hash", ColumnType::Varchar(128)),
                ColumnDef::new("radar_station", ColumnType::Integer),
            ],
        },
        // No UNIQUE(group_id): one row per group is a convention that
        // integrity verification reports on.
        TableDef {
            name: PERMISSION,
            columns: vec![
                ColumnDef::primary_key(keys.permission),
                ColumnDef::foreign_key("group_id", USER_GROUP, keys.group),
                ColumnDef::new("can_select", ColumnType::Boolean),
                ColumnDef::new("can_insert", ColumnType::Boolean),
                ColumnDef::new("can_update", ColumnType::Boolean),
                ColumnDef::new("can_delete", ColumnType::Boolean),
            ],
        },
        TableDef {
            name: RADAR_DETECTION,
            columns: vec![
                ColumnDef::primary_key(keys.detection),
                ColumnDef::new("radar_id", ColumnType::Integer),
                ColumnDef::new("timestamp", ColumnType::Timestamp),
                ColumnDef::new("x", ColumnType::Real),
                ColumnDef::new("y", ColumnType::Real),
                ColumnDef::new("z", ColumnType::Real),
                ColumnDef::new("reflection_rate", ColumnType::Real),
            ],
        },
        TableDef {
            name: AUDIT_LOG,
            columns: vec![
                ColumnDef::primary_key(keys.log),
                ColumnDef::new("timestamp", ColumnType::Timestamp),
                ColumnDef::foreign_key("user_id", USER_ACCOUNT, keys.account),
                ColumnDef::new("operation", ColumnType::Varchar(64)),
                ColumnDef::new("radar_station", ColumnType::Integer),
                ColumnDef::new("table_name", ColumnType::Varchar(64)),
                ColumnDef::new("description", ColumnType::Text),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_keys_every_table_on_underscore_id() {
        for table in build(SchemaVariant::Baseline) {
            assert_eq!(table.primary_key().name, "_id", "{}", table.name);
        }
    }

    #[test]
    fn expanded_uses_named_keys() {
        let tables = build(SchemaVariant::Expanded);
        let keys: Vec<_> = tables.iter().map(|t| t.primary_key().name).collect();
        assert_eq!(
            keys,
            ["group_id", "user_id", "permission_id", "detection_id", "log_id"]
        );
    }
}

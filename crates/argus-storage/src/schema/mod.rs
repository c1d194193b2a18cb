//! Schema definitions: the five radar tables as data, rendered into SQL by
//! a `Dialect`.

pub mod dialect;
pub mod row;
pub mod tables;
pub mod value;

use argus_core::models::SchemaVariant;

pub use dialect::Dialect;
pub use row::TableRow;
pub use tables::{AUDIT_LOG, PERMISSION, RADAR_DETECTION, USER_ACCOUNT, USER_GROUP};
pub use value::SqlValue;

/// Logical column types, mapped to concrete types per dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Real,
    Boolean,
    Timestamp,
    /// Bounded string; the bound only shows up in dialects that have one.
    Varchar(u16),
    Text,
}

/// A reference from a column to another table's key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub ty: ColumnType,
    pub nullable: bool,
    pub primary_key: bool,
    pub references: Option<ForeignKey>,
}

impl ColumnDef {
    /// A NOT NULL column.
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            nullable: false,
            primary_key: false,
            references: None,
        }
    }

    /// An auto-incrementing integer primary key.
    pub const fn primary_key(name: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Integer,
            nullable: false,
            primary_key: true,
            references: None,
        }
    }

    /// A NOT NULL integer column referencing `table.column`.
    pub const fn foreign_key(name: &'static str, table: &'static str, column: &'static str) -> Self {
        Self {
            name,
            ty: ColumnType::Integer,
            nullable: false,
            primary_key: false,
            references: Some(ForeignKey { table, column }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableDef {
    pub name: &'static str,
    pub columns: Vec<ColumnDef>,
}

impl TableDef {
    /// The table's primary key column. Every table here has exactly one.
    pub fn primary_key(&self) -> &ColumnDef {
        self.columns
            .iter()
            .find(|c| c.primary_key)
            .unwrap_or(&self.columns[0])
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    /// Columns carrying a foreign key, with their reference.
    pub fn foreign_keys(&self) -> impl Iterator<Item = (&ColumnDef, ForeignKey)> {
        self.columns
            .iter()
            .filter_map(|c| c.references.map(|fk| (c, fk)))
    }

    /// Name of the matching document collection.
    pub fn collection_name(&self) -> String {
        self.name.to_ascii_lowercase()
    }
}

/// The complete table set for one variant, in creation order (parents
/// before children).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    variant: SchemaVariant,
    tables: Vec<TableDef>,
}

impl Schema {
    pub fn for_variant(variant: SchemaVariant) -> Self {
        Self {
            variant,
            tables: tables::build(variant),
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    /// Tables in creation order.
    pub fn tables(&self) -> &[TableDef] {
        &self.tables
    }

    /// Tables in drop order (children before parents).
    pub fn drop_order(&self) -> impl Iterator<Item = &TableDef> {
        self.tables.iter().rev()
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn table_names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parents_are_created_before_children() {
        for variant in SchemaVariant::ALL {
            let schema = Schema::for_variant(variant);
            let names = schema.table_names();
            for table in schema.tables() {
                let own = names.iter().position(|n| *n == table.name).unwrap();
                for (_, fk) in table.foreign_keys() {
                    let parent = names.iter().position(|n| *n == fk.table).unwrap();
                    assert!(parent < own, "{} must come after {}", table.name, fk.table);
                }
            }
        }
    }

    #[test]
    fn foreign_keys_point_at_primary_keys() {
        for variant in SchemaVariant::ALL {
            let schema = Schema::for_variant(variant);
            for table in schema.tables() {
                for (_, fk) in table.foreign_keys() {
                    let parent = schema.table(fk.table).unwrap();
                    assert_eq!(parent.primary_key().name, fk.column);
                }
            }
        }
    }

    #[test]
    fn table_lookup_ignores_case() {
        let schema = Schema::for_variant(SchemaVariant::Baseline);
        assert_eq!(schema.table("user_group").unwrap().name, USER_GROUP);
        assert_eq!(schema.table(USER_GROUP).unwrap().collection_name(), "user_group");
    }
}

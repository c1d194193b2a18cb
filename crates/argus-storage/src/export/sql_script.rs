//! MySQL bootstrap script.

use argus_core::models::SchemaVariant;

use super::documents::each_table;
use crate::fixtures::FixtureSet;
use crate::schema::{Dialect, Schema};

/// Full MySQL script: recreate `database_name`, create every table in
/// dependency order, then insert the fixtures table by table.
pub fn render_sql_script(variant: SchemaVariant, database_name: &str) -> String {
    let dialect = Dialect::MySql;
    let schema = Schema::for_variant(variant);
    let fixtures = FixtureSet::for_variant(variant);
    let db = dialect.quote(database_name);

    let mut parts = vec![
        format!("-- Argus radar schema ({variant} variant) for MySQL."),
        format!("DROP DATABASE IF EXISTS {db};\nCREATE DATABASE {db};\nUSE {db};"),
    ];
    parts.extend(schema.tables().iter().map(|t| dialect.create_table(t)));
    parts.extend(
        each_table(&schema, &fixtures).filter_map(|(table, rows)| dialect.insert_literals(table, &rows)),
    );

    let mut script = parts.join("\n\n");
    script.push('\n');
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_before_inserting() {
        let script = render_sql_script(SchemaVariant::Expanded, "radar_db");
        let create = script.find("CREATE TABLE `AUDIT_LOG`").unwrap();
        let insert = script.find("INSERT INTO `USER_GROUP`").unwrap();
        assert!(script.starts_with("-- Argus radar schema (expanded variant)"));
        assert!(script.contains("USE `radar_db`;"));
        assert!(create < insert);
    }
}

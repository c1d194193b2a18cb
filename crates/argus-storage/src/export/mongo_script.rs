//! `mongosh` seed script.

use argus_core::errors::IntegrityError;
use argus_core::models::SchemaVariant;

use super::documents::{document_fields, each_table, iso_timestamp, validated};
use crate::schema::SqlValue;

/// Script that selects `database_name`, drops it, and inserts every
/// collection with one `insertMany` call.
pub fn render_mongo_script(variant: SchemaVariant, database_name: &str) -> Result<String, IntegrityError> {
    let (schema, fixtures) = validated(variant)?;
    let mut lines = vec![
        format!("// Argus radar schema ({variant} variant), MongoDB seed script."),
        format!("db = db.getSiblingDB({});", js_string(database_name)),
        "db.dropDatabase();".to_string(),
    ];

    for (table, rows) in each_table(&schema, &fixtures) {
        lines.push(String::new());
        lines.push(format!(
            "db.getCollection({}).insertMany([",
            js_string(&table.collection_name())
        ));
        lines.extend(rows.iter().map(|row| {
            let fields: Vec<String> = document_fields(table, row)
                .into_iter()
                .map(|(name, value)| format!("{name}: {}", js_value(value)))
                .collect();
            format!("  {{ {} }},", fields.join(", "))
        }));
        lines.push("]);".to_string());
    }

    let mut script = lines.join("\n");
    script.push('\n');
    Ok(script)
}

/// A double-quoted JavaScript string literal. JSON string escaping is a
/// subset of JavaScript's.
fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

fn js_value(value: &SqlValue) -> String {
    match value {
        SqlValue::Integer(v) => v.to_string(),
        SqlValue::Real(v) => format!("{v:?}"),
        SqlValue::Boolean(v) => v.to_string(),
        SqlValue::Text(s) => js_string(s),
        SqlValue::Timestamp(ts) => format!("ISODate(\"{}\")", iso_timestamp(ts)),
    }
}

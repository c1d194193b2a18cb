//! Document form of the fixtures: one collection per table, documents
//! keyed by `_id`, timestamps as relaxed Extended JSON dates.

use argus_core::errors::IntegrityError;
use argus_core::models::SchemaVariant;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::fixtures::FixtureSet;
use crate::integrity::check_fixtures;
use crate::schema::{Schema, SqlValue, TableDef};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collection {
    pub name: String,
    pub documents: Vec<Value>,
}

impl Collection {
    /// A JSON array suitable for `mongoimport --jsonArray`.
    pub fn to_json_array(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.documents)
    }
}

/// Documents per collection, in table creation order. The fixtures are
/// checked first because the document store enforces no references.
pub fn collection_documents(variant: SchemaVariant) -> Result<Vec<Collection>, IntegrityError> {
    let (schema, fixtures) = validated(variant)?;
    Ok(each_table(&schema, &fixtures)
        .map(|(table, rows)| Collection {
            name: table.collection_name(),
            documents: rows
                .iter()
                .map(|row| {
                    let doc: Map<String, Value> = document_fields(table, row)
                        .into_iter()
                        .map(|(name, value)| (name.to_string(), ejson_value(value)))
                        .collect();
                    Value::Object(doc)
                })
                .collect(),
        })
        .collect())
}

pub(crate) fn validated(variant: SchemaVariant) -> Result<(Schema, FixtureSet), IntegrityError> {
    let fixtures = FixtureSet::for_variant(variant);
    check_fixtures(&fixtures).ensure_consistent()?;
    Ok((Schema::for_variant(variant), fixtures))
}

/// Pair every table with its fixture rows. Tables without rows are skipped.
pub(crate) fn each_table<'a>(
    schema: &'a Schema,
    fixtures: &FixtureSet,
) -> impl Iterator<Item = (&'a TableDef, Vec<Vec<SqlValue>>)> {
    fixtures
        .rows_by_table()
        .into_iter()
        .filter_map(move |(name, rows)| schema.table(name).map(|t| (t, rows)))
}

/// Field names and values of one document. The primary key is renamed to
/// `_id`.
pub(crate) fn document_fields<'a>(
    table: &TableDef,
    row: &'a [SqlValue],
) -> Vec<(&'static str, &'a SqlValue)> {
    table
        .columns
        .iter()
        .zip(row)
        .map(|(column, value)| {
            let name = if column.primary_key { "_id" } else { column.name };
            (name, value)
        })
        .collect()
}

/// ISO-8601 with millisecond precision, read as UTC.
pub(crate) fn iso_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

fn ejson_value(value: &SqlValue) -> Value {
    match value {
        SqlValue::Integer(v) => json!(v),
        SqlValue::Real(v) => json!(v),
        SqlValue::Boolean(v) => json!(v),
        SqlValue::Text(v) => json!(v),
        SqlValue::Timestamp(ts) => json!({ "$date": iso_timestamp(ts) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_keys_become_underscore_id() {
        let collections = collection_documents(SchemaVariant::Expanded).unwrap();
        let groups = &collections[0];
        assert_eq!(groups.name, "user_group");
        assert_eq!(groups.documents[0]["_id"], json!(1));
        assert!(groups.documents[0].get("group_id").is_none());
        assert_eq!(groups.documents[0]["group_name"], json!("Admins"));
    }

    #[test]
    fn timestamps_use_extended_json_dates() {
        let collections = collection_documents(SchemaVariant::Baseline).unwrap();
        let detections = collections
            .iter()
            .find(|c| c.name == "radar_detection")
            .unwrap();
        assert_eq!(
            detections.documents[0]["timestamp"],
            json!({ "$date": "2025-03-14T08:00:00.000Z" })
        );
    }
}

//! Script and document export of a variant's schema and fixtures.
//!
//! The SQL script targets MySQL; the document forms target MongoDB
//! (`mongosh` seed script, or Extended JSON arrays for `mongoimport`).

pub mod documents;
pub mod mongo_script;
pub mod sql_script;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use argus_core::errors::{BootstrapError, ConfigError, StorageError};
use argus_core::models::SchemaVariant;

pub use documents::{collection_documents, Collection};
pub use mongo_script::render_mongo_script;
pub use sql_script::render_sql_script;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Sql,
    Mongo,
    Json,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sql => "sql",
            Self::Mongo => "mongo",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sql" | "mysql" => Ok(Self::Sql),
            "mongo" | "mongosh" | "js" => Ok(Self::Mongo),
            "json" | "ejson" => Ok(Self::Json),
            other => Err(ConfigError::InvalidValue {
                field: "export.format".to_string(),
                message: format!("unknown export format '{other}' (expected sql, mongo or json)"),
            }),
        }
    }
}

/// Render `variant` in `format` and write it under `out_dir`, creating the
/// directory if needed. Returns the files written.
///
/// `sql` writes `<database>.sql`, `mongo` writes `<database>.js`, `json`
/// writes one `<collection>.json` array per collection.
pub fn write_export(
    format: ExportFormat,
    variant: SchemaVariant,
    database_name: &str,
    out_dir: &Path,
) -> Result<Vec<PathBuf>, BootstrapError> {
    std::fs::create_dir_all(out_dir).map_err(|e| io_err(out_dir, e))?;

    let files: Vec<(PathBuf, String)> = match format {
        ExportFormat::Sql => vec![(
            out_dir.join(format!("{database_name}.sql")),
            render_sql_script(variant, database_name),
        )],
        ExportFormat::Mongo => vec![(
            out_dir.join(format!("{database_name}.js")),
            render_mongo_script(variant, database_name)?,
        )],
        ExportFormat::Json => {
            let mut files = Vec::new();
            for collection in collection_documents(variant)? {
                let path = out_dir.join(format!("{}.json", collection.name));
                let body = collection
                    .to_json_array()
                    .map_err(|e| serialization_err(&path, e))?;
                files.push((path, body));
            }
            files
        }
    };

    let mut written = Vec::with_capacity(files.len());
    for (path, body) in files {
        std::fs::write(&path, body).map_err(|e| io_err(&path, e))?;
        tracing::info!(path = %path.display(), %format, %variant, "wrote export");
        written.push(path);
    }
    Ok(written)
}

pub(crate) fn io_err(path: &Path, e: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn serialization_err(path: &Path, e: serde_json::Error) -> StorageError {
    StorageError::Serialization {
        target: path.display().to_string(),
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::errors::ArgusErrorCode;

    #[test]
    fn json_failures_are_not_reported_as_io() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = serialization_err(Path::new("out/AUDIT_LOG.json"), cause);
        assert!(matches!(err, StorageError::Serialization { ref target, .. } if target == "out/AUDIT_LOG.json"));
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        assert!(err.coded_string().starts_with("[SERIALIZATION_ERROR] Failed to serialize out/AUDIT_LOG.json"));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn format_names_parse_case_insensitively() {
        assert_eq!("SQL".parse::<ExportFormat>().unwrap(), ExportFormat::Sql);
        assert_eq!("mongosh".parse::<ExportFormat>().unwrap(), ExportFormat::Mongo);
        assert_eq!(" json ".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("csv".parse::<ExportFormat>().is_err());
    }
}

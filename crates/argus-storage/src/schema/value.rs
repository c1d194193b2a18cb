//! Typed cell values shared by SQLite binding, SQL literal rendering and
//! document export.

use argus_core::constants::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use rusqlite::types::{ToSql, ToSqlOutput};

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Text(String),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// The value as an integer, when it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// `YYYY-MM-DD HH:MM:SS`, the layout both SQL dialects accept.
    pub fn format_timestamp(ts: &NaiveDateTime) -> String {
        ts.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Integer(v) => ToSqlOutput::from(*v),
            Self::Real(v) => ToSqlOutput::from(*v),
            Self::Boolean(v) => ToSqlOutput::from(*v),
            Self::Text(v) => ToSqlOutput::from(v.as_str()),
            Self::Timestamp(ts) => ToSqlOutput::from(Self::format_timestamp(ts)),
        })
    }
}

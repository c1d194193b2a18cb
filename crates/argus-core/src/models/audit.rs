//! AuditLogEntry: an append-only record of one user action.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::RadarStation;

/// Operation tag stored in the audit log. The column is free text; known
/// tags get their own variant and anything else round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditOperation {
    LoginAttempt,
    LoginSuccess,
    LoginFailed,
    LogoutSuccess,
    PermissionsRequest,
    Select,
    Insert,
    Update,
    Delete,
    Other(String),
}

impl AuditOperation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LoginAttempt => "LOGIN_ATTEMPT",
            Self::LoginSuccess => "LOGIN_SUCCESS",
            Self::LoginFailed => "LOGIN_FAILED",
            Self::LogoutSuccess => "LOGOUT_SUCCESS",
            Self::PermissionsRequest => "PERMISSIONS_REQUEST",
            Self::Select => "SELECT",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for AuditOperation {
    fn from(tag: &str) -> Self {
        match tag {
            "LOGIN_ATTEMPT" => Self::LoginAttempt,
            "LOGIN_SUCCESS" => Self::LoginSuccess,
            "LOGIN_FAILED" => Self::LoginFailed,
            "LOGOUT_SUCCESS" => Self::LogoutSuccess,
            "PERMISSIONS_REQUEST" => Self::PermissionsRequest,
            "SELECT" => Self::Select,
            "INSERT" => Self::Insert,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AuditOperation {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<AuditOperation> for String {
    fn from(op: AuditOperation) -> Self {
        op.as_str().to_string()
    }
}

impl fmt::Display for AuditOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: i64,
    pub timestamp: NaiveDateTime,
    /// Must reference an existing `UserAccount`.
    pub user_id: i64,
    pub operation: AuditOperation,
    pub radar_station: RadarStation,
    /// Free-text table name; not a reference to an actual table.
    pub table_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_round_trip() {
        for tag in ["LOGIN_ATTEMPT", "SELECT", "UPDATE", "DELETE", "LOGOUT_SUCCESS"] {
            let op = AuditOperation::from(tag);
            assert!(!matches!(op, AuditOperation::Other(_)), "{tag} should be known");
            assert_eq!(op.as_str(), tag);
        }
    }

    #[test]
    fn unknown_tags_are_preserved() {
        let op = AuditOperation::from("DETECTION_EXPORT");
        assert_eq!(op, AuditOperation::Other("DETECTION_EXPORT".to_string()));
        assert_eq!(op.to_string(), "DETECTION_EXPORT");
    }
}

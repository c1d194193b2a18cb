//! UserAccount: a login belonging to exactly one group.

use serde::{Deserialize, Serialize};

use super::RadarStation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: i64,
    /// Must reference an existing `UserGroup`.
    pub group_id: i64,
    pub username: String,
    /// Opaque credential digest, never a raw password.
    pub password_hash: String,
    pub radar_station: RadarStation,
}

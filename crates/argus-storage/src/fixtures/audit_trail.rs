//! Builder for scripted audit log sessions.

use argus_core::models::{AuditLogEntry, AuditOperation, RadarStation, UserAccount};
use chrono::{Duration, NaiveDateTime};

use crate::schema::{AUDIT_LOG, RADAR_DETECTION, USER_ACCOUNT};

/// Station a trail records at until moved with [`AuditTrail::at`].
pub const DEFAULT_SESSION_STATION: RadarStation = RadarStation(1);

/// Appends audit entries with consecutive ids starting at 1. Offsets are
/// seconds after the trail's epoch.
///
/// Entries carry the station the session runs at, not the acting
/// account's home station; unassigned accounts still log in somewhere.
#[derive(Debug)]
pub struct AuditTrail {
    epoch: NaiveDateTime,
    station: RadarStation,
    entries: Vec<AuditLogEntry>,
}

impl AuditTrail {
    pub fn new(epoch: NaiveDateTime) -> Self {
        Self {
            epoch,
            station: DEFAULT_SESSION_STATION,
            entries: Vec::new(),
        }
    }

    /// Record subsequent entries at `station`.
    pub fn at(&mut self, station: RadarStation) -> &mut Self {
        self.station = station;
        self
    }

    pub fn record(
        &mut self,
        offset_secs: i64,
        account: &UserAccount,
        operation: AuditOperation,
        table_name: &str,
        description: impl Into<String>,
    ) -> &mut Self {
        let id = self.entries.len() as i64 + 1;
        self.entries.push(AuditLogEntry {
            id,
            timestamp: self.epoch + Duration::seconds(offset_secs),
            user_id: account.id,
            operation,
            radar_station: self.station,
            table_name: table_name.to_string(),
            description: description.into(),
        });
        self
    }

    pub fn login_attempt(&mut self, offset_secs: i64, account: &UserAccount) -> &mut Self {
        let text = format!("User '{}' attempting to log in.", account.username);
        self.record(offset_secs, account, AuditOperation::LoginAttempt, USER_ACCOUNT, text)
    }

    /// A login attempt followed one second later by its success.
    pub fn login(&mut self, offset_secs: i64, account: &UserAccount) -> &mut Self {
        let text = format!("User '{}' logged in successfully.", account.username);
        self.login_attempt(offset_secs, account)
            .record(offset_secs + 1, account, AuditOperation::LoginSuccess, USER_ACCOUNT, text)
    }

    /// A login attempt followed one second later by its rejection.
    pub fn failed_login(&mut self, offset_secs: i64, account: &UserAccount) -> &mut Self {
        let text = format!("User '{}' failed to log in.", account.username);
        self.login_attempt(offset_secs, account)
            .record(offset_secs + 1, account, AuditOperation::LoginFailed, USER_ACCOUNT, text)
    }

    pub fn permissions_request(&mut self, offset_secs: i64, account: &UserAccount) -> &mut Self {
        let text = format!("Requesting permissions for user '{}'.", account.username);
        self.record(
            offset_secs,
            account,
            AuditOperation::PermissionsRequest,
            USER_ACCOUNT,
            text,
        )
    }

    pub fn view_detections(&mut self, offset_secs: i64, account: &UserAccount, rows: usize) -> &mut Self {
        let text = format!("Retrieved {rows} radar detection entries.");
        self.record(offset_secs, account, AuditOperation::Select, RADAR_DETECTION, text)
    }

    pub fn view_audit_log(&mut self, offset_secs: i64, account: &UserAccount) -> &mut Self {
        self.record(
            offset_secs,
            account,
            AuditOperation::Select,
            AUDIT_LOG,
            "Retrieved audit log entries.",
        )
    }

    pub fn logout(&mut self, offset_secs: i64, account: &UserAccount) -> &mut Self {
        let text = format!("User '{}' logged out successfully.", account.username);
        self.record(offset_secs, account, AuditOperation::LogoutSuccess, USER_ACCOUNT, text)
    }

    pub fn finish(&mut self) -> Vec<AuditLogEntry> {
        std::mem::take(&mut self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::fixture_time;

    fn operator() -> UserAccount {
        UserAccount {
            id: 7,
            group_id: 3,
            username: "operator1".to_string(),
            password_hash: String::new(),
            radar_station: RadarStation(2),
        }
    }

    #[test]
    fn login_records_attempt_then_success() {
        let user = operator();
        let entries = AuditTrail::new(fixture_time(9, 0, 0))
            .at(RadarStation(2))
            .login(30, &user)
            .finish();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, AuditOperation::LoginAttempt);
        assert_eq!(entries[1].operation, AuditOperation::LoginSuccess);
        assert_eq!(entries[1].timestamp, fixture_time(9, 0, 31));
        assert_eq!(entries[1].id, 2);
        assert!(entries.iter().all(|e| e.user_id == 7 && e.radar_station == RadarStation(2)));
    }

    #[test]
    fn station_comes_from_the_session_not_the_account() {
        let mut guest = operator();
        guest.radar_station = RadarStation::UNASSIGNED;
        let entries = AuditTrail::new(fixture_time(9, 0, 0))
            .failed_login(0, &guest)
            .at(RadarStation(4))
            .logout(10, &guest)
            .finish();

        assert_eq!(entries[0].radar_station, DEFAULT_SESSION_STATION);
        assert_eq!(entries[1].radar_station, DEFAULT_SESSION_STATION);
        assert_eq!(entries[2].radar_station, RadarStation(4));
    }

    #[test]
    fn descriptions_name_the_user() {
        let user = operator();
        let entries = AuditTrail::new(fixture_time(9, 0, 0))
            .failed_login(0, &user)
            .finish();
        assert_eq!(entries[1].description, "User 'operator1' failed to log in.");
        assert_eq!(entries[1].table_name, USER_ACCOUNT);
    }
}

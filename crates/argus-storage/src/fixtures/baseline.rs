//! Baseline fixtures: a single-site layout with four groups.

use argus_core::models::{
    Capabilities, Permission, Position, RadarStation, UserAccount, UserGroup,
};

use super::audit_trail::AuditTrail;
use super::tracks::{Clutter, DetectionLog, TrackSpec};
use super::{credential_hash, fixture_time, FixtureSet};

const GROUPS: [(&str, &str, Capabilities); 4] = [
    ("Admins", "System administrators with full access.", Capabilities::ALL),
    (
        "Commanders",
        "Station commanders; may review and correct detections.",
        Capabilities::new(true, true, true, false),
    ),
    (
        "Operators",
        "Console operators; may log new detections.",
        Capabilities::new(true, true, false, false),
    ),
    ("Guests", "Accounts awaiting approval; no access.", Capabilities::NONE),
];

/// (username, group id, station)
const ACCOUNTS: [(&str, i64, u32); 6] = [
    ("admin", 1, 1),
    ("commander", 2, 1),
    ("operator1", 3, 1),
    ("operator2", 3, 2),
    ("operator3", 3, 3),
    ("guest", 4, 0),
];

pub(crate) const TRACKS: [TrackSpec; 2] = [
    TrackSpec {
        radar_id: 1,
        start: Position::new(1200.0, -3400.0, 9100.0),
        step: Position::new(220.0, 35.0, 0.0),
        samples: 8,
        offset_secs: 0,
        interval_secs: 5,
        reflection: 12.5,
        flicker: [0.0, 0.3, -0.2],
    },
    TrackSpec {
        radar_id: 2,
        start: Position::new(-8000.0, 5200.0, 10600.0),
        step: Position::new(-180.0, -60.0, -5.0),
        samples: 8,
        offset_secs: 2,
        interval_secs: 5,
        reflection: 18.0,
        flicker: [0.0, -0.4, 0.5],
    },
];

pub(crate) const CLUTTER: [Clutter; 4] = [
    Clutter::new(1, 7, Position::new(350.0, 410.0, 15.0), 0.42),
    Clutter::new(2, 13, Position::new(-2210.0, 980.0, 40.0), 0.87),
    Clutter::new(3, 21, Position::new(5120.0, -4475.0, 120.0), 0.35),
    Clutter::new(1, 33, Position::new(-760.0, -1290.0, 8.0), 1.12),
];

pub(crate) fn fixtures() -> FixtureSet {
    let groups: Vec<UserGroup> = GROUPS
        .iter()
        .zip(1..)
        .map(|((name, description, _), id)| UserGroup::new(id, *name, *description))
        .collect();

    let permissions: Vec<Permission> = GROUPS
        .iter()
        .zip(1..)
        .map(|((_, _, capabilities), id)| Permission {
            id,
            group_id: id,
            capabilities: *capabilities,
        })
        .collect();

    let accounts: Vec<UserAccount> = ACCOUNTS
        .iter()
        .zip(1..)
        .map(|((username, group_id, station), id)| UserAccount {
            id,
            group_id: *group_id,
            username: username.to_string(),
            password_hash: credential_hash(username, &format!("argus-{id:02}")),
            radar_station: RadarStation(*station),
        })
        .collect();

    let mut log = DetectionLog::new(fixture_time(8, 0, 0));
    for spec in &TRACKS {
        log.track(spec);
    }
    let detections = log.clutter(&CLUTTER).finish();

    let (admin, operator, guest) = (&accounts[0], &accounts[2], &accounts[5]);
    let audit_log = AuditTrail::new(fixture_time(9, 0, 0))
        .at(RadarStation(1))
        .login(0, admin)
        .view_detections(12, admin, detections.len())
        .logout(95, admin)
        .login(300, operator)
        .view_detections(320, operator, detections.len())
        .logout(470, operator)
        .failed_login(600, guest)
        .finish();

    FixtureSet {
        groups,
        accounts,
        permissions,
        detections,
        audit_log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guests_hold_no_capabilities() {
        let set = fixtures();
        let guest = set.accounts.iter().find(|a| a.username == "guest").unwrap();
        let perm = set
            .permissions
            .iter()
            .find(|p| p.group_id == guest.group_id)
            .unwrap();
        assert_eq!(perm.capabilities, Capabilities::NONE);
        assert!(!guest.radar_station.is_assigned());
    }

    #[test]
    fn audit_entries_reference_existing_accounts() {
        let set = fixtures();
        for entry in &set.audit_log {
            assert!(set.accounts.iter().any(|a| a.id == entry.user_id));
        }
    }
}

//! Expanded fixtures: five radar stations, each with its own set of role
//! groups, plus global administrator and unauthorized groups.

use argus_core::models::{
    AuditLogEntry, AuditOperation, Capabilities, Permission, Position, RadarStation, UserAccount,
    UserGroup,
};

use super::audit_trail::AuditTrail;
use super::baseline;
use super::tracks::{ClusterSpec, Clutter, DetectionLog, TrackSpec};
use super::{credential_hash, fixture_time, FixtureSet};
use crate::schema::RADAR_DETECTION;

pub const STATIONS: u32 = 5;

const ADMINS_GROUP: i64 = 1;
const UNAUTHORIZED_GROUP: i64 = 2;

struct Role {
    title: &'static str,
    handle: &'static str,
    duty: &'static str,
    capabilities: Capabilities,
}

const ROLES: [Role; 6] = [
    Role {
        title: "Commanders",
        handle: "cmdr",
        duty: "Station command; full control over station data.",
        capabilities: Capabilities::ALL,
    },
    Role {
        title: "Officers",
        handle: "officer",
        duty: "Watch officers; may add and correct detections.",
        capabilities: Capabilities::new(true, true, true, false),
    },
    Role {
        title: "Operators",
        handle: "operator",
        duty: "Console operators; may log new detections.",
        capabilities: Capabilities::new(true, true, false, false),
    },
    Role {
        title: "Analysts",
        handle: "analyst",
        duty: "Track analysts; read-only access to detections.",
        capabilities: Capabilities::READ_ONLY,
    },
    Role {
        title: "Technicians",
        handle: "tech",
        duty: "Maintenance crew; may recalibrate recorded detections.",
        capabilities: Capabilities::new(true, false, true, false),
    },
    Role {
        title: "Auditors",
        handle: "auditor",
        duty: "Compliance reviewers; read-only access including the audit log.",
        capabilities: Capabilities::READ_ONLY,
    },
];

/// Group id of `role` at `station` (1-based). Role groups follow the two
/// global groups, station by station.
pub const fn role_group_id(station: u32, role: usize) -> i64 {
    3 + (station as i64 - 1) * ROLES.len() as i64 + role as i64
}

/// Accounts beyond the one-per-group roster: (username, group id, station).
const EXTRA_ACCOUNTS: [(&str, i64, u32); 5] = [
    ("operator2.rs1", role_group_id(1, 2), 1),
    ("operator2.rs2", role_group_id(2, 2), 2),
    ("analyst2.rs3", role_group_id(3, 3), 3),
    ("pending.user", UNAUTHORIZED_GROUP, 0),
    ("admin2", ADMINS_GROUP, 2),
];

const TRACKS: [TrackSpec; 3] = [
    TrackSpec {
        samples: 10,
        ..baseline::TRACKS[0]
    },
    TrackSpec {
        samples: 10,
        ..baseline::TRACKS[1]
    },
    TrackSpec {
        radar_id: 3,
        start: Position::new(4000.0, 12000.0, 3000.0),
        step: Position::new(0.0, -250.0, 40.0),
        samples: 10,
        offset_secs: 4,
        interval_secs: 5,
        reflection: 6.2,
        flicker: [0.0, 0.1, -0.1],
    },
];

const WEATHER: ClusterSpec = ClusterSpec {
    radar_id: 1,
    centre: Position::new(15000.0, 8000.0, 2500.0),
    columns: 4,
    rows: 3,
    spacing: 300.0,
    offset_secs: 60,
    interval_secs: 5,
    reflection: 2.0,
    reflection_step: 0.1,
};

const EXTRA_CLUTTER: [Clutter; 4] = [
    Clutter::new(2, 41, Position::new(1875.0, 2290.0, 22.0), 0.66),
    Clutter::new(3, 52, Position::new(-4030.0, 615.0, 75.0), 0.29),
    Clutter::new(1, 64, Position::new(9900.0, -120.0, 310.0), 1.48),
    Clutter::new(2, 77, Position::new(-15.0, -6640.0, 55.0), 0.91),
];

fn groups() -> Vec<UserGroup> {
    let mut groups = vec![
        UserGroup::new(ADMINS_GROUP, "Admins", "System administrators with full access."),
        UserGroup::new(
            UNAUTHORIZED_GROUP,
            "Unauthorized",
            "Accounts without any granted access.",
        ),
    ];
    for station in (1..=STATIONS).map(RadarStation) {
        for (idx, role) in ROLES.iter().enumerate() {
            groups.push(UserGroup::new(
                role_group_id(station.id(), idx),
                format!("{} @ {station}", role.title),
                format!("{} Station {station}.", role.duty),
            ));
        }
    }
    groups
}

fn permissions() -> Vec<Permission> {
    let mut grants = vec![
        (ADMINS_GROUP, Capabilities::ALL),
        (UNAUTHORIZED_GROUP, Capabilities::NONE),
    ];
    for station in 1..=STATIONS {
        for (idx, role) in ROLES.iter().enumerate() {
            grants.push((role_group_id(station, idx), role.capabilities));
        }
    }
    grants
        .into_iter()
        .map(|(group_id, capabilities)| Permission {
            id: group_id,
            group_id,
            capabilities,
        })
        .collect()
}

fn accounts() -> Vec<UserAccount> {
    let mut roster: Vec<(String, i64, u32)> = vec![
        ("admin".to_string(), ADMINS_GROUP, 1),
        ("guest".to_string(), UNAUTHORIZED_GROUP, 0),
    ];
    for station in 1..=STATIONS {
        for (idx, role) in ROLES.iter().enumerate() {
            roster.push((
                format!("{}.rs{station}", role.handle),
                role_group_id(station, idx),
                station,
            ));
        }
    }
    for (username, group_id, station) in EXTRA_ACCOUNTS {
        roster.push((username.to_string(), group_id, station));
    }

    roster
        .into_iter()
        .zip(1..)
        .map(|((username, group_id, station), id)| UserAccount {
            id,
            group_id,
            password_hash: credential_hash(&username, &format!("argus-{id:02}")),
            username,
            radar_station: RadarStation(station),
        })
        .collect()
}

/// Usernames the scripted audit sessions act as.
const ACTORS: [&str; 6] = [
    "admin",
    "guest",
    "officer.rs1",
    "cmdr.rs2",
    "analyst.rs3",
    "auditor.rs1",
];

fn account<'a>(accounts: &'a [UserAccount], username: &str) -> Option<&'a UserAccount> {
    accounts.iter().find(|a| a.username == username)
}

/// Scripted sessions across three stations. `None` when an actor is
/// missing from `accounts`.
fn audit_log(accounts: &[UserAccount], total: usize) -> Option<Vec<AuditLogEntry>> {
    let [admin, guest, officer, commander, analyst, auditor] = ACTORS;
    let admin = account(accounts, admin)?;
    let guest = account(accounts, guest)?;
    let officer = account(accounts, officer)?;
    let commander = account(accounts, commander)?;
    let analyst = account(accounts, analyst)?;
    let auditor = account(accounts, auditor)?;

    let entries = AuditTrail::new(fixture_time(9, 0, 0))
        .at(RadarStation(1))
        .login(0, admin)
        .permissions_request(5, admin)
        .view_detections(12, admin, total)
        .view_audit_log(40, admin)
        .logout(95, admin)
        .login(300, officer)
        .view_detections(320, officer, 10)
        .record(
            410,
            officer,
            AuditOperation::Update,
            RADAR_DETECTION,
            "Updated radar detection ID 3 (reflection_rate).",
        )
        .logout(470, officer)
        .failed_login(600, guest)
        .login(615, guest)
        .record(
            630,
            guest,
            AuditOperation::Select,
            RADAR_DETECTION,
            "Attempted to view detections without permission.",
        )
        .logout(640, guest)
        .at(RadarStation(2))
        .login(900, commander)
        .view_detections(930, commander, 10)
        .record(
            1010,
            commander,
            AuditOperation::Delete,
            RADAR_DETECTION,
            "Deleted radar detection ID 47 (clutter).",
        )
        .logout(1050, commander)
        .at(RadarStation(3))
        .login(1200, analyst)
        .view_detections(1215, analyst, 10)
        .record(
            1290,
            analyst,
            AuditOperation::Update,
            RADAR_DETECTION,
            "Attempted to edit detections without permission.",
        )
        .logout(1300, analyst)
        .at(RadarStation(1))
        .login(1500, auditor)
        .view_audit_log(1520, auditor)
        .logout(1600, auditor)
        .finish();
    Some(entries)
}

pub(crate) fn fixtures() -> FixtureSet {
    let groups = groups();
    let permissions = permissions();
    let accounts = accounts();

    let mut log = DetectionLog::new(fixture_time(8, 0, 0));
    for spec in &TRACKS {
        log.track(spec);
    }
    let detections = log
        .cluster(&WEATHER)
        .clutter(&baseline::CLUTTER)
        .clutter(&EXTRA_CLUTTER)
        .finish();

    let audit_log = audit_log(&accounts, detections.len()).unwrap_or_else(|| {
        tracing::error!("audit script names an account missing from the roster");
        Vec::new()
    });

    FixtureSet {
        groups,
        accounts,
        permissions,
        detections,
        audit_log,
    }
}

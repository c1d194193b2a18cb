//! Radar station identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::UNASSIGNED_STATION;

/// Integer id of a physical radar site. Not an entity of its own; it scopes
/// accounts and audit entries informally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadarStation(pub u32);

impl RadarStation {
    pub const UNASSIGNED: RadarStation = RadarStation(UNASSIGNED_STATION);

    pub fn id(&self) -> u32 {
        self.0
    }

    pub fn is_assigned(&self) -> bool {
        self.0 != UNASSIGNED_STATION
    }
}

impl fmt::Display for RadarStation {
    /// Short label used in group names: `RS1`, `RS2`, ...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RS{}", self.0)
    }
}

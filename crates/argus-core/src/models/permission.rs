//! Permission: capability flags granted to a group.

use serde::{Deserialize, Serialize};

/// Four independent capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub can_select: bool,
    pub can_insert: bool,
    pub can_update: bool,
    pub can_delete: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities::new(false, false, false, false);
    pub const ALL: Capabilities = Capabilities::new(true, true, true, true);
    pub const READ_ONLY: Capabilities = Capabilities::new(true, false, false, false);

    pub const fn new(select: bool, insert: bool, update: bool, delete: bool) -> Self {
        Self {
            can_select: select,
            can_insert: insert,
            can_update: update,
            can_delete: delete,
        }
    }

    /// Number of granted flags.
    pub fn granted(&self) -> usize {
        [self.can_select, self.can_insert, self.can_update, self.can_delete]
            .iter()
            .filter(|flag| **flag)
            .count()
    }
}

/// One permission row. By convention there is exactly one per group; the
/// schema does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub group_id: i64,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn granted_counts_flags() {
        assert_eq!(Capabilities::NONE.granted(), 0);
        assert_eq!(Capabilities::READ_ONLY.granted(), 1);
        assert_eq!(Capabilities::new(true, false, true, false).granted(), 2);
        assert_eq!(Capabilities::ALL.granted(), 4);
    }
}

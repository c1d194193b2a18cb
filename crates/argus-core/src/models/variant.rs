//! Schema variants: the assignment layout and the expanded project layout.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which flavour of the radar schema to create.
///
/// `Baseline` keys every table on `_id` and carries the small assignment
/// fixture set. `Expanded` uses named keys (`group_id`, `user_id`, ...) and
/// the station-scoped fixture set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVariant {
    Baseline,
    #[default]
    Expanded,
}

impl SchemaVariant {
    pub const ALL: [SchemaVariant; 2] = [SchemaVariant::Baseline, SchemaVariant::Expanded];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Expanded => "expanded",
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "baseline" => Ok(Self::Baseline),
            "expanded" => Ok(Self::Expanded),
            other => Err(ConfigError::InvalidValue {
                field: "bootstrap.variant".to_string(),
                message: format!("unknown variant '{other}' (expected baseline or expanded)"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Expanded".parse::<SchemaVariant>().unwrap(), SchemaVariant::Expanded);
        assert_eq!(" baseline ".parse::<SchemaVariant>().unwrap(), SchemaVariant::Baseline);
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            "mongo".parse::<SchemaVariant>(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn display_matches_name() {
        for variant in SchemaVariant::ALL {
            assert_eq!(variant.to_string().parse::<SchemaVariant>().unwrap(), variant);
        }
    }
}

//! Data model: the five entities the bootstrap creates, plus the schema
//! variant and radar station identifiers they are scoped by.

pub mod account;
pub mod audit;
pub mod detection;
pub mod group;
pub mod permission;
pub mod station;
pub mod variant;

pub use account::UserAccount;
pub use audit::{AuditLogEntry, AuditOperation};
pub use detection::{Position, RadarDetection};
pub use group::UserGroup;
pub use permission::{Capabilities, Permission};
pub use station::RadarStation;
pub use variant::SchemaVariant;

//! SQLite persistence layer for the Argus radar schema: connection
//! management, schema definitions, fixtures, bootstrap, integrity
//! verification, script export and per-station provisioning.

pub mod bootstrap;
pub mod connection;
pub mod export;
pub mod fixtures;
pub mod integrity;
pub mod provision;
pub mod queries;
pub mod schema;

pub use bootstrap::{bootstrap, bootstrap_with, BootstrapReport};
pub use connection::RadarDatabase;
pub use fixtures::{FixtureCounts, FixtureSet};
pub use integrity::IntegrityReport;
pub use schema::{Dialect, Schema};

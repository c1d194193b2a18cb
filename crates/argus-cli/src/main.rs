//! argus: bootstrap, provision, verify and export the radar schema.
//!
//! Usage: argus [--root DIR] [--variant V] [--database-name NAME] <command>

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use argus_core::config::{ArgusConfig, CliOverrides};
use argus_storage::export::ExportFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "argus")]
#[command(about = "Radar schema bootstrap and station provisioning", version)]
struct Cli {
    /// Directory searched for argus.toml; relative paths resolve against it
    #[arg(long, global = true, env = "ARGUS_ROOT", default_value = ".")]
    root: PathBuf,

    /// Schema variant: baseline or expanded
    #[arg(long, global = true)]
    variant: Option<String>,

    /// Database name used for files, scripts and collections
    #[arg(long, global = true)]
    database_name: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drop, recreate and seed a SQLite database
    Bootstrap {
        /// Database file (default: <root>/<database-name>.sqlite)
        #[arg(long)]
        db: Option<PathBuf>,
        /// Delete the database file and its WAL/SHM files first
        #[arg(long)]
        fresh: bool,
        /// Skip the post-bootstrap integrity check
        #[arg(long)]
        no_verify: bool,
    },

    /// Wipe and recreate one seeded store per radar station
    Provision {
        /// Parent directory of the station directories
        #[arg(long)]
        data_dir: Option<String>,
        /// Number of stations
        #[arg(long)]
        stations: Option<u32>,
    },

    /// Check references, permission rows and row counts
    Verify {
        #[arg(long)]
        db: Option<PathBuf>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the schema and fixtures as a MySQL or MongoDB artifact
    Export {
        /// sql, mongo or json
        #[arg(long, default_value = "sql")]
        format: ExportFormat,
        /// Output directory
        #[arg(long)]
        out: Option<String>,
    },

    /// List tables and row counts
    Inspect {
        #[arg(long)]
        db: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            variant: self.variant.clone(),
            database_name: self.database_name.clone(),
            ..Default::default()
        };
        match &self.command {
            Command::Provision { data_dir, stations } => {
                overrides.data_dir = data_dir.clone();
                overrides.station_count = *stations;
            }
            Command::Export { out, .. } => overrides.output_dir = out.clone(),
            _ => {}
        }
        overrides
    }
}

fn main() -> Result<()> {
    argus_core::tracing::init_tracing();
    let cli = Cli::parse();

    let config = ArgusConfig::load(&cli.root, Some(&cli.overrides()))
        .with_context(|| format!("loading configuration from {}", cli.root.display()))?;
    tracing::debug!(root = %cli.root.display(), "configuration loaded");
    let ctx = commands::Context::new(cli.root.clone(), config);

    match cli.command {
        Command::Bootstrap { db, fresh, no_verify } => {
            commands::bootstrap(&ctx, db.as_deref(), fresh, !no_verify)
        }
        Command::Provision { .. } => commands::provision(&ctx),
        Command::Verify { db, json } => commands::verify(&ctx, db.as_deref(), json),
        Command::Export { format, .. } => commands::export(&ctx, format),
        Command::Inspect { db, json } => commands::inspect(&ctx, db.as_deref(), json),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn provision_flags_become_overrides() {
        let cli = Cli::parse_from([
            "argus",
            "provision",
            "--stations",
            "4",
            "--data-dir",
            "/var/lib/argus",
            "--variant",
            "baseline",
        ]);
        let overrides = cli.overrides();
        assert_eq!(overrides.station_count, Some(4));
        assert_eq!(overrides.data_dir.as_deref(), Some("/var/lib/argus"));
        assert_eq!(overrides.variant.as_deref(), Some("baseline"));
    }

    #[test]
    fn export_format_is_parsed() {
        let cli = Cli::parse_from(["argus", "export", "--format", "json", "--out", "seed"]);
        match cli.command {
            Command::Export { format, out } => {
                assert_eq!(format, ExportFormat::Json);
                assert_eq!(out.as_deref(), Some("seed"));
            }
            _ => panic!("expected export"),
        }
    }
}

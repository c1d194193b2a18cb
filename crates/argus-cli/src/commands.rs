//! Subcommand implementations. Each resolves its paths from the loaded
//! configuration and prints a short human-readable summary.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use argus_core::config::ArgusConfig;
use argus_core::errors::ArgusErrorCode;
use argus_core::models::SchemaVariant;
use argus_storage::export::{write_export, ExportFormat};
use argus_storage::integrity::check_database;
use argus_storage::provision::{recreate_station_stores, StationPlan};
use argus_storage::queries::table_counts;
use argus_storage::{FixtureCounts, IntegrityReport, RadarDatabase, Schema};

/// Resolved configuration plus the root it was loaded from.
pub struct Context {
    root: PathBuf,
    config: ArgusConfig,
}

impl Context {
    pub fn new(root: PathBuf, config: ArgusConfig) -> Self {
        Self { root, config }
    }

    /// Absolute paths pass through; relative ones resolve against the root.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// `--db`, or `<root>/<database_name>.sqlite`.
    fn database_path(&self, db: Option<&Path>) -> PathBuf {
        match db {
            Some(path) => self.resolve(path),
            None => self.root.join(format!(
                "{}.sqlite",
                self.config.bootstrap.effective_database_name()
            )),
        }
    }
}

fn open_existing(path: &Path) -> Result<RadarDatabase> {
    if !path.is_file() {
        bail!("database {} does not exist; run `argus bootstrap` first", path.display());
    }
    RadarDatabase::open(path).map_err(|e| anyhow::anyhow!(e.coded_string()))
}

pub fn bootstrap(ctx: &Context, db: Option<&Path>, fresh: bool, verify: bool) -> Result<()> {
    let path = ctx.database_path(db);
    let variant = ctx.config.bootstrap.effective_variant();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let database = if fresh {
        RadarDatabase::recreate(&path)
    } else {
        RadarDatabase::open(&path)
    }
    .map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    let report = database
        .bootstrap(variant)
        .map_err(|e| anyhow::anyhow!(e.coded_string()))
        .with_context(|| format!("bootstrapping {}", path.display()))?;

    if verify && ctx.config.bootstrap.effective_verify() {
        verify_database(&database, variant)?;
    }

    println!(
        "bootstrapped {} ({} variant): {} rows in {} ms",
        path.display(),
        report.variant,
        report.counts.total(),
        report.duration_ms
    );
    Ok(())
}

fn verify_database(database: &RadarDatabase, variant: SchemaVariant) -> Result<IntegrityReport> {
    let schema = Schema::for_variant(variant);
    let report = database
        .with_conn(|conn| check_database(conn, &schema))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    report
        .ensure_consistent()
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    report
        .ensure_counts(&FixtureCounts::for_variant(variant))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    Ok(report)
}

pub fn provision(ctx: &Context) -> Result<()> {
    let plan = StationPlan::from_config(&ctx.config, &ctx.root);
    let stores = recreate_station_stores(&plan).map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    for store in &stores {
        println!(
            "{}: {} ({} rows)",
            store.station,
            store.database.display(),
            store.report.counts.total()
        );
    }
    println!(
        "provisioned {} station store(s) under {}",
        stores.len(),
        plan.data_dir.display()
    );
    Ok(())
}

pub fn verify(ctx: &Context, db: Option<&Path>, json: bool) -> Result<()> {
    let path = ctx.database_path(db);
    let variant = ctx.config.bootstrap.effective_variant();
    let database = open_existing(&path)?;
    let report = verify_database(&database, variant)
        .with_context(|| format!("verifying {} as {variant}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for count in &report.row_counts {
            println!("{:<16} {:>6}", count.table, count.rows);
        }
        for warning in report.warnings() {
            println!("warning: {warning}");
        }
        println!("{} is consistent ({variant} variant)", path.display());
    }
    Ok(())
}

pub fn export(ctx: &Context, format: ExportFormat) -> Result<()> {
    let out_dir = ctx.resolve(&ctx.config.export.effective_output_dir());
    let written = write_export(
        format,
        ctx.config.bootstrap.effective_variant(),
        &ctx.config.bootstrap.effective_database_name(),
        &out_dir,
    )
    .map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

pub fn inspect(ctx: &Context, db: Option<&Path>, json: bool) -> Result<()> {
    let path = ctx.database_path(db);
    let database = open_existing(&path)?;
    let counts = database
        .with_conn(table_counts)
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else if counts.is_empty() {
        println!("{}: no tables", path.display());
    } else {
        for count in &counts {
            println!("{:<16} {:>6}", count.table, count.rows);
        }
    }
    Ok(())
}

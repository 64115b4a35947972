//! Catalogue maintenance commands for the donut shop database.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]
//!
//! ```sh
//! donut-admin --database-url postgres://shop@localhost/donuts migrate
//! donut-admin seed --file backend/fixtures/demo_catalogue.json
//! donut-admin delete-type glazed
//! ```

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use donut_shop::domain::ports::CatalogueAdminRepository;
use donut_shop::domain::{CatalogueSeed, DonutTypeName, seed_catalogue};
use donut_shop::outbound::persistence::{
    DbPool, DieselCatalogueRepository, PoolConfig, run_pending_migrations,
};

/// `donut-admin` arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "donut-admin", about = "Manage the donut shop catalogue", version)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url", global = true)]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Apply pending schema migrations.
    Migrate,
    /// Load donut types and donuts from a JSON seed document.
    Seed {
        #[arg(long = "file", value_name = "path")]
        file: PathBuf,
    },
    /// Delete a donut type and every donut filed under it.
    DeleteType {
        #[arg(value_name = "name")]
        name: String,
    },
}

/// Install the stderr subscriber, logging rather than failing when one is
/// already set.
fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

fn main() -> io::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let database_url = resolve_database_url(args.database_url, env::var("DATABASE_URL").ok())?;

    if matches!(args.command, Command::Migrate) {
        return migrate(&database_url);
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main(args.command, database_url))
}

fn migrate(database_url: &str) -> io::Result<()> {
    let applied = run_pending_migrations(database_url)
        .map_err(|error| io::Error::other(error.to_string()))?;
    let mut out = io::stdout().lock();
    writeln!(out, "applied_migrations={}", applied.len())?;
    for version in applied {
        writeln!(out, "migration={version}")?;
    }
    Ok(())
}

async fn async_main(command: Command, database_url: String) -> io::Result<()> {
    let pool = DbPool::new(PoolConfig::new(&database_url).with_max_size(2).eager())
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;
    let repo = DieselCatalogueRepository::new(pool);

    match command {
        Command::Migrate => Ok(()),
        Command::Seed { file } => {
            let seed = load_seed(&file)?;
            let report = seed_catalogue(&repo, &seed)
                .await
                .map_err(|error| io::Error::other(format!("seed catalogue: {error}")))?;
            let mut out = io::stdout().lock();
            writeln!(out, "types_created={}", report.types_created)?;
            writeln!(out, "types_reused={}", report.types_reused)?;
            writeln!(out, "donuts_created={}", report.donuts_created)
        }
        Command::DeleteType { name } => {
            let name = DonutTypeName::new(name)
                .map_err(|error| io::Error::new(io::ErrorKind::InvalidInput, error.to_string()))?;
            let deleted = repo
                .delete_type(&name)
                .await
                .map_err(|error| io::Error::other(format!("delete donut type: {error}")))?;
            writeln!(io::stdout().lock(), "deleted={deleted}")
        }
    }
}

fn load_seed(path: &Path) -> io::Result<CatalogueSeed> {
    let document = fs::read_to_string(path).map_err(|error| {
        io::Error::new(
            error.kind(),
            format!("read seed file '{}': {error}", path.display()),
        )
    })?;
    CatalogueSeed::from_json(&document)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))
}

fn resolve_database_url(explicit: Option<String>, from_env: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    match from_env {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DATABASE_URL must not be empty",
        )),
        None => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or DATABASE_URL",
        )),
    }
}

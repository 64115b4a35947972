//! Storefront entry point: loads settings, wires the catalogue store and
//! serves the donut pages.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use donut_shop::inbound::http::health::HealthState;
use donut_shop::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use donut_shop::settings::AppSettings;
use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }
}

async fn migrate(database_url: &str) -> io::Result<()> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .map_err(|err| io::Error::other(format!("migration task failed: {err}")))?
        .map_err(|err| io::Error::other(err.to_string()))?;
    Ok(())
}

async fn build_server_config(settings: &AppSettings) -> io::Result<ServerConfig> {
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let mut config =
        ServerConfig::new(bind_addr).with_demo_catalogue(settings.seed_demo_catalogue);

    let Some(database_url) = settings.database_url() else {
        return Ok(config);
    };
    if settings.run_migrations {
        migrate(database_url).await?;
    }
    let max_size = settings
        .db_pool_max_size()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(max_size))
        .await
        .map_err(|err| io::Error::other(format!("create database pool: {err}")))?;
    config = config.with_db_pool(pool);
    Ok(config)
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = AppSettings::load()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let config = build_server_config(&settings).await?;
    let bind_addr = config.bind_addr;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    info!(%bind_addr, "donut shop listening");
    server.await
}

//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `DONUT_SHOP_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Settings for the storefront server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DONUT_SHOP")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server uses the in-memory store.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_pool_max_size: Option<u32>,
    /// Apply pending migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Load the bundled demo catalogue into an empty store at startup.
    #[ortho_config(default = false)]
    pub seed_demo_catalogue: bool,
}

/// Raised when a setting holds an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("bind_addr `{value}` is not a socket address: {message}")]
    BindAddr { value: String, message: String },
    #[error("db_pool_max_size must be at least 1")]
    PoolSize,
}

impl AppSettings {
    /// Listening address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Fails when the configured value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to 10.
    ///
    /// # Errors
    ///
    /// Rejects a size of zero.
    pub fn db_pool_max_size(&self) -> Result<u32, SettingsError> {
        match self.db_pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE) {
            0 => Err(SettingsError::PoolSize),
            size => Ok(size),
        }
    }
}

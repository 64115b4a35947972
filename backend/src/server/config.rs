//! HTTP server configuration object.

use std::net::SocketAddr;

use donut_shop::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_demo_catalogue: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            seed_demo_catalogue: false,
        }
    }

    /// Serve the catalogue from PostgreSQL instead of the in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Load the bundled demo catalogue when the store has no types yet.
    #[must_use]
    pub fn with_demo_catalogue(mut self, enabled: bool) -> Self {
        self.seed_demo_catalogue = enabled;
        self
    }
}

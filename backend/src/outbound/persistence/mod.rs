//! PostgreSQL persistence adapters using Diesel.
//!
//! Connections come from a `bb8` pool through `diesel-async`. Row structs and
//! the table definitions stay private to this module; callers only see
//! domain types and port errors.
//!
//! ```ignore
//! use donut_shop::outbound::persistence::{DbPool, DieselCatalogueRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/donuts")).await?;
//! let repo = DieselCatalogueRepository::new(pool);
//! ```

mod diesel_catalogue_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_catalogue_repository::DieselCatalogueRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

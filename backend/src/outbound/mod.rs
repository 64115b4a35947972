//! Outbound adapters implementing the catalogue ports.
//!
//! - **persistence**: PostgreSQL via Diesel, used when a database URL is set.
//! - **memory**: process-local store for development and tests.

pub mod memory;
pub mod persistence;

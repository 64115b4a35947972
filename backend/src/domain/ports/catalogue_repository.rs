//! Read-side port for the donut catalogue.
//!
//! Inbound adapters list donuts and donut types through this port without
//! knowing whether the catalogue lives in PostgreSQL or in memory.

use async_trait::async_trait;

use crate::domain::{Donut, DonutType};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading the catalogue.
    pub enum CatalogueRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue read connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "catalogue read query failed: {message}",
    }
}

/// Port for reading donuts and their categories.
///
/// Listings follow insertion order. Filtering never fails because of the
/// filter value itself: an unknown type name yields an empty vector.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueRepository: Send + Sync {
    /// Return every donut with its type resolved.
    async fn list_all(&self) -> Result<Vec<Donut>, CatalogueRepositoryError>;

    /// Return donuts whose type name equals `type_name` exactly.
    async fn list_by_type(&self, type_name: &str) -> Result<Vec<Donut>, CatalogueRepositoryError>;

    /// Return every donut type.
    async fn list_types(&self) -> Result<Vec<DonutType>, CatalogueRepositoryError>;
}

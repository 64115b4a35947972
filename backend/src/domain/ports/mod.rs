//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod catalogue_admin_repository;
mod catalogue_page_query;
mod catalogue_repository;

#[cfg(test)]
pub use catalogue_admin_repository::MockCatalogueAdminRepository;
pub use catalogue_admin_repository::{CatalogueAdminRepository, CatalogueAdminRepositoryError};
#[cfg(test)]
pub use catalogue_page_query::MockCataloguePageQuery;
pub use catalogue_page_query::{CatalogueIndex, CataloguePageQuery};
#[cfg(test)]
pub use catalogue_repository::MockCatalogueRepository;
pub use catalogue_repository::{CatalogueRepository, CatalogueRepositoryError};

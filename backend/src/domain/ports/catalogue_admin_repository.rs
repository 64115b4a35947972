//! Write-side port used by administrative tooling.
//!
//! The storefront never writes; seeding and maintenance commands use this
//! port to manage donut types and donuts.

use async_trait::async_trait;

use crate::domain::{Donut, DonutType, DonutTypeName, NewDonut};

use super::define_port_error;

define_port_error! {
    /// Errors raised while changing the catalogue.
    pub enum CatalogueAdminRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "catalogue write connection failed: {message}",
        /// Statement failed during execution or row conversion.
        Query { message: String } =>
            "catalogue write query failed: {message}",
        /// A donut type with this name already exists.
        DuplicateType { name: String } =>
            "donut type `{name}` already exists",
        /// The referenced donut type does not exist.
        UnknownType { name: String } =>
            "donut type `{name}` does not exist",
    }
}

/// Port for administrative catalogue changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogueAdminRepository: Send + Sync {
    /// Create a donut type.
    ///
    /// Fails with [`CatalogueAdminRepositoryError::DuplicateType`] when the
    /// name is taken.
    async fn create_type(
        &self,
        name: &DonutTypeName,
    ) -> Result<DonutType, CatalogueAdminRepositoryError>;

    /// Create a donut under an existing type.
    ///
    /// Fails with [`CatalogueAdminRepositoryError::UnknownType`] when the
    /// referenced type is missing.
    async fn create_donut(&self, donut: &NewDonut)
    -> Result<Donut, CatalogueAdminRepositoryError>;

    /// Delete a donut type together with every donut filed under it.
    ///
    /// Returns `false` when no type had that name.
    async fn delete_type(&self, name: &DonutTypeName)
    -> Result<bool, CatalogueAdminRepositoryError>;
}

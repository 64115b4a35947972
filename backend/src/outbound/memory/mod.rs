//! In-memory catalogue adapter.
//!
//! Serves the storefront when no database is configured and backs the
//! catalogue property tests. Rows keep insertion order and identifiers are
//! assigned from a monotonically increasing counter, mirroring `SERIAL`
//! columns. Deleting a type removes its donuts in the same critical section,
//! matching the `ON DELETE CASCADE` foreign key of the SQL schema.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{
    CatalogueAdminRepository, CatalogueAdminRepositoryError, CatalogueRepository,
    CatalogueRepositoryError,
};
use crate::domain::{Donut, DonutType, DonutTypeName, NewDonut};

#[derive(Debug, Default)]
struct Shelves {
    types: Vec<DonutType>,
    donuts: Vec<Donut>,
    next_type_id: i32,
    next_donut_id: i32,
}

impl Shelves {
    fn type_named(&self, name: &str) -> Option<&DonutType> {
        self.types.iter().find(|t| t.name().as_str() == name)
    }

    fn allocate_type_id(&mut self) -> i32 {
        self.next_type_id += 1;
        self.next_type_id
    }

    fn allocate_donut_id(&mut self) -> i32 {
        self.next_donut_id += 1;
        self.next_donut_id
    }
}

/// Catalogue store held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryCatalogue {
    shelves: RwLock<Shelves>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryCatalogue {
    async fn list_all(&self) -> Result<Vec<Donut>, CatalogueRepositoryError> {
        Ok(self.shelves.read().await.donuts.clone())
    }

    async fn list_by_type(&self, type_name: &str) -> Result<Vec<Donut>, CatalogueRepositoryError> {
        let shelves = self.shelves.read().await;
        Ok(shelves
            .donuts
            .iter()
            .filter(|donut| donut.donut_type().name().as_str() == type_name)
            .cloned()
            .collect())
    }

    async fn list_types(&self) -> Result<Vec<DonutType>, CatalogueRepositoryError> {
        Ok(self.shelves.read().await.types.clone())
    }
}

#[async_trait]
impl CatalogueAdminRepository for InMemoryCatalogue {
    async fn create_type(
        &self,
        name: &DonutTypeName,
    ) -> Result<DonutType, CatalogueAdminRepositoryError> {
        let mut shelves = self.shelves.write().await;
        if shelves.type_named(name.as_str()).is_some() {
            return Err(CatalogueAdminRepositoryError::duplicate_type(name.as_str()));
        }
        let donut_type = DonutType::new(shelves.allocate_type_id(), name.clone());
        shelves.types.push(donut_type.clone());
        Ok(donut_type)
    }

    async fn create_donut(&self, donut: &NewDonut) -> Result<Donut, CatalogueAdminRepositoryError> {
        let mut shelves = self.shelves.write().await;
        let donut_type = shelves
            .type_named(donut.type_name().as_str())
            .cloned()
            .ok_or_else(|| {
                CatalogueAdminRepositoryError::unknown_type(donut.type_name().as_str())
            })?;
        let stored = donut.clone().into_donut(shelves.allocate_donut_id(), donut_type);
        shelves.donuts.push(stored.clone());
        Ok(stored)
    }

    async fn delete_type(&self, name: &DonutTypeName) -> Result<bool, CatalogueAdminRepositoryError> {
        let mut shelves = self.shelves.write().await;
        let Some(type_id) = shelves.type_named(name.as_str()).map(DonutType::id) else {
            return Ok(false);
        };
        shelves.types.retain(|t| t.id() != type_id);
        let before = shelves.donuts.len();
        shelves.donuts.retain(|d| d.donut_type().id() != type_id);
        debug!(
            donut_type = %name,
            donuts_removed = before - shelves.donuts.len(),
            "donut type deleted"
        );
        Ok(true)
    }
}

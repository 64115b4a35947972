//! PostgreSQL-backed catalogue adapter.
//!
//! Implements both the storefront read port and the administrative write
//! port. Listings are ordered by primary key, i.e. insertion order. Deleting
//! a type relies on the `ON DELETE CASCADE` foreign key to remove its donuts.
//!
//! Rows may also be written by other tools, so reads accept whatever the
//! schema stores rather than re-applying the creation rules.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{
    CatalogueAdminRepository, CatalogueAdminRepositoryError, CatalogueRepository,
    CatalogueRepositoryError,
};
use crate::domain::{
    CatalogueValidationError, Donut, DonutDraft, DonutType, DonutTypeName, NewDonut,
};

use super::diesel_error_mapping::{DieselFailure, classify, pool_message};
use super::models::{DonutRow, DonutTypeRow, NewDonutRow, NewDonutTypeRow};
use super::pool::{DbPool, PoolError};
use super::schema::{donut_types, donuts};

/// Diesel-backed catalogue repository.
#[derive(Clone)]
pub struct DieselCatalogueRepository {
    pool: DbPool,
}

impl DieselCatalogueRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn read_pool_error(error: PoolError) -> CatalogueRepositoryError {
    CatalogueRepositoryError::connection(pool_message(error))
}

fn read_diesel_error(error: diesel::result::Error) -> CatalogueRepositoryError {
    match classify(error, "catalogue read") {
        DieselFailure::Connection(message) => CatalogueRepositoryError::connection(message),
        DieselFailure::UniqueViolation | DieselFailure::ForeignKeyViolation => {
            CatalogueRepositoryError::query("catalogue read: constraint violation")
        }
        DieselFailure::Query(message) => CatalogueRepositoryError::query(message),
    }
}

fn write_pool_error(error: PoolError) -> CatalogueAdminRepositoryError {
    CatalogueAdminRepositoryError::connection(pool_message(error))
}

/// Map a write failure; constraint violations name the type involved.
fn write_diesel_error(
    error: diesel::result::Error,
    operation: &'static str,
    type_name: &DonutTypeName,
) -> CatalogueAdminRepositoryError {
    match classify(error, operation) {
        DieselFailure::Connection(message) => CatalogueAdminRepositoryError::connection(message),
        DieselFailure::UniqueViolation => {
            CatalogueAdminRepositoryError::duplicate_type(type_name.as_str())
        }
        DieselFailure::ForeignKeyViolation => {
            CatalogueAdminRepositoryError::unknown_type(type_name.as_str())
        }
        DieselFailure::Query(message) => CatalogueAdminRepositoryError::query(message),
    }
}

fn row_to_donut_type(row: DonutTypeRow) -> DonutType {
    DonutType::new(row.id, DonutTypeName::from_stored(row.name))
}

fn row_to_donut((row, type_row): JoinedRow) -> Result<Donut, CatalogueValidationError> {
    Donut::from_stored(DonutDraft {
        id: row.id,
        name: row.name,
        donut_type: row_to_donut_type(type_row),
        description: row.description,
        price: row.price,
        image: row.image,
    })
}

/// Convert joined rows, skipping any a [`Donut`] cannot represent so one bad
/// row does not hide the rest of the catalogue.
fn donuts_from_rows(rows: Vec<JoinedRow>) -> Vec<Donut> {
    rows.into_iter()
        .filter_map(|joined| {
            let donut_id = joined.0.id;
            row_to_donut(joined)
                .inspect_err(|err| warn!(donut_id, error = %err, "skipping unlistable donut row"))
                .ok()
        })
        .collect()
}

type JoinedRow = (DonutRow, DonutTypeRow);

impl DieselCatalogueRepository {
    async fn load_donuts(
        &self,
        type_name: Option<&str>,
    ) -> Result<Vec<Donut>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(read_pool_error)?;
        let mut query = donuts::table
            .inner_join(donut_types::table)
            .select((DonutRow::as_select(), DonutTypeRow::as_select()))
            .order_by(donuts::id)
            .into_boxed::<Pg>();
        if let Some(name) = type_name {
            query = query.filter(donut_types::name.eq(name));
        }
        let rows: Vec<JoinedRow> = query.load(&mut conn).await.map_err(read_diesel_error)?;
        Ok(donuts_from_rows(rows))
    }
}

#[async_trait]
impl CatalogueRepository for DieselCatalogueRepository {
    async fn list_all(&self) -> Result<Vec<Donut>, CatalogueRepositoryError> {
        self.load_donuts(None).await
    }

    async fn list_by_type(&self, type_name: &str) -> Result<Vec<Donut>, CatalogueRepositoryError> {
        self.load_donuts(Some(type_name)).await
    }

    async fn list_types(&self) -> Result<Vec<DonutType>, CatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(read_pool_error)?;
        let rows: Vec<DonutTypeRow> = donut_types::table
            .select(DonutTypeRow::as_select())
            .order_by(donut_types::id)
            .load(&mut conn)
            .await
            .map_err(read_diesel_error)?;
        Ok(rows.into_iter().map(row_to_donut_type).collect())
    }
}

#[async_trait]
impl CatalogueAdminRepository for DieselCatalogueRepository {
    async fn create_type(
        &self,
        name: &DonutTypeName,
    ) -> Result<DonutType, CatalogueAdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(write_pool_error)?;
        let row: DonutTypeRow = diesel::insert_into(donut_types::table)
            .values(NewDonutTypeRow {
                name: name.as_str(),
            })
            .returning(DonutTypeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| write_diesel_error(err, "insert donut type", name))?;
        Ok(DonutType::new(row.id, name.clone()))
    }

    async fn create_donut(&self, donut: &NewDonut) -> Result<Donut, CatalogueAdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(write_pool_error)?;
        let type_name = donut.type_name();

        let inserted = conn
            .transaction::<_, diesel::result::Error, _>(|conn| {
                async move {
                    let Some(type_row) = donut_types::table
                        .filter(donut_types::name.eq(type_name.as_str()))
                        .select(DonutTypeRow::as_select())
                        .first(conn)
                        .await
                        .optional()?
                    else {
                        return Ok(None);
                    };
                    let id: i32 = diesel::insert_into(donuts::table)
                        .values(NewDonutRow {
                            name: donut.name(),
                            type_id: type_row.id,
                            description: donut.description(),
                            price: donut.price().cents(),
                            image: donut.image().as_str(),
                        })
                        .returning(donuts::id)
                        .get_result(conn)
                        .await?;
                    Ok(Some((id, type_row.id)))
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| write_diesel_error(err, "insert donut", type_name))?;

        let (id, type_id) = inserted
            .ok_or_else(|| CatalogueAdminRepositoryError::unknown_type(type_name.as_str()))?;
        debug!(donut_id = id, donut_type = %type_name, "donut created");
        Ok(donut
            .clone()
            .into_donut(id, DonutType::new(type_id, type_name.clone())))
    }

    async fn delete_type(&self, name: &DonutTypeName) -> Result<bool, CatalogueAdminRepositoryError> {
        let mut conn = self.pool.get().await.map_err(write_pool_error)?;
        let deleted = diesel::delete(donut_types::table.filter(donut_types::name.eq(name.as_str())))
            .execute(&mut conn)
            .await
            .map_err(|err| write_diesel_error(err, "delete donut type", name))?;
        Ok(deleted > 0)
    }
}

//! Builders choosing the catalogue adapter behind the HTTP state.

use std::io;
use std::sync::Arc;

use tracing::{info, warn};

use donut_shop::domain::ports::{CatalogueAdminRepository, CatalogueRepository};
use donut_shop::domain::{CataloguePageService, CatalogueSeed, seed_catalogue};
use donut_shop::inbound::http::state::HttpState;
use donut_shop::inbound::http::templates::PageRenderer;
use donut_shop::outbound::memory::InMemoryCatalogue;
use donut_shop::outbound::persistence::DieselCatalogueRepository;

use super::ServerConfig;

/// Read and write handles onto the same catalogue store.
struct CatalogueStore {
    reads: Arc<dyn CatalogueRepository>,
    writes: Arc<dyn CatalogueAdminRepository>,
}

fn select_store(config: &ServerConfig) -> CatalogueStore {
    if let Some(pool) = &config.db_pool {
        info!("serving catalogue from PostgreSQL");
        let repo = Arc::new(DieselCatalogueRepository::new(pool.clone()));
        CatalogueStore {
            reads: repo.clone(),
            writes: repo,
        }
    } else {
        warn!("no database configured; serving catalogue from memory");
        let store = Arc::new(InMemoryCatalogue::new());
        CatalogueStore {
            reads: store.clone(),
            writes: store,
        }
    }
}

/// Seed the demo catalogue unless the store already has types.
async fn seed_demo(store: &CatalogueStore) -> io::Result<()> {
    let existing = store
        .reads
        .list_types()
        .await
        .map_err(|err| io::Error::other(format!("inspect catalogue before seeding: {err}")))?;
    if !existing.is_empty() {
        info!(types = existing.len(), "catalogue already stocked; skipping demo seed");
        return Ok(());
    }

    let seed = CatalogueSeed::demo()
        .map_err(|err| io::Error::other(format!("load demo catalogue: {err}")))?;
    seed_catalogue(store.writes.as_ref(), &seed)
        .await
        .map_err(|err| io::Error::other(format!("seed demo catalogue: {err}")))?;
    Ok(())
}

/// Build handler state for `config`, seeding the demo catalogue on request.
///
/// # Errors
///
/// Fails when the templates do not compile or seeding fails.
pub(super) async fn build_http_state(config: &ServerConfig) -> io::Result<HttpState> {
    let store = select_store(config);
    if config.seed_demo_catalogue {
        seed_demo(&store).await?;
    }

    let pages = PageRenderer::new()
        .map_err(|err| io::Error::other(format!("compile page templates: {err}")))?;
    let catalogue = Arc::new(CataloguePageService::new(store.reads));
    Ok(HttpState::new(catalogue, pages))
}

//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the
//! catalogue use-case port, so they are testable without a database.

use std::sync::Arc;

use crate::domain::ports::CataloguePageQuery;
use crate::inbound::http::templates::PageRenderer;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub catalogue: Arc<dyn CataloguePageQuery>,
    pub pages: Arc<PageRenderer>,
}

impl HttpState {
    /// Bundle the catalogue query port with a page renderer.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use donut_shop::domain::CataloguePageService;
    /// use donut_shop::inbound::http::state::HttpState;
    /// use donut_shop::inbound::http::templates::PageRenderer;
    /// use donut_shop::outbound::memory::InMemoryCatalogue;
    ///
    /// let store = Arc::new(InMemoryCatalogue::new());
    /// let renderer = PageRenderer::new().expect("templates compile");
    /// let state = HttpState::new(Arc::new(CataloguePageService::new(store)), renderer);
    /// let _catalogue = state.catalogue.clone();
    /// ```
    pub fn new(catalogue: Arc<dyn CataloguePageQuery>, pages: PageRenderer) -> Self {
        Self {
            catalogue,
            pages: Arc::new(pages),
        }
    }
}

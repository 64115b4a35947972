//! Driving port for the catalogue landing page.

use async_trait::async_trait;

use crate::domain::{Donut, DonutType, Error, TypeFilter};

/// Everything the catalogue page template needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueIndex {
    /// Donuts matching the active filter.
    pub donuts: Vec<Donut>,
    /// Every donut type, for the filter navigation.
    pub donut_types: Vec<DonutType>,
    /// Raw filter value, `all` when unfiltered.
    pub selected_type: String,
}

/// Use-case port for assembling catalogue listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CataloguePageQuery: Send + Sync {
    /// Assemble the listing for `filter`. An unknown type name yields an
    /// empty donut list alongside the full type list.
    async fn index(&self, filter: &TypeFilter) -> Result<CatalogueIndex, Error>;
}

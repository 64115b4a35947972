//! Catalogue seed documents and the service that applies them.
//!
//! A seed is a JSON document listing donut types and donuts:
//!
//! ```json
//! {
//!   "types": ["glazed", "filled"],
//!   "donuts": [
//!     { "name": "Boston Cream", "type": "filled", "description": "...",
//!       "price": 225, "image": "https://cdn.example.test/boston.png" }
//!   ]
//! }
//! ```
//!
//! Types referenced by donuts but not listed under `types` are created too.
//! Existing types are reused, so applying a seed twice only adds donuts.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::ports::{CatalogueAdminRepository, CatalogueAdminRepositoryError};
use crate::domain::{CatalogueValidationError, DonutTypeName, NewDonut, NewDonutDraft};

const DEMO_CATALOGUE: &str = include_str!("../../fixtures/demo_catalogue.json");

/// Errors raised while loading a seed document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueSeedError {
    /// The document is not valid seed JSON.
    #[error("seed document is malformed: {message}")]
    Malformed { message: String },
    /// A listed type name failed validation.
    #[error("seed type #{index} is invalid: {source}")]
    InvalidType {
        index: usize,
        source: CatalogueValidationError,
    },
    /// A listed donut failed validation.
    #[error("seed donut #{index} is invalid: {source}")]
    InvalidDonut {
        index: usize,
        source: CatalogueValidationError,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogueSeedDocument {
    #[serde(default)]
    types: Vec<String>,
    #[serde(default)]
    donuts: Vec<NewDonutDraft>,
}

/// Validated seed ready to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueSeed {
    types: Vec<DonutTypeName>,
    donuts: Vec<NewDonut>,
}

impl CatalogueSeed {
    /// Parse and validate a seed document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use donut_shop::domain::CatalogueSeed;
    ///
    /// let seed = CatalogueSeed::from_json(r#"{"types": ["glazed", "cake"]}"#)
    ///     .expect("valid seed");
    /// assert_eq!(seed.types().len(), 2);
    /// assert!(seed.donuts().is_empty());
    /// ```
    pub fn from_json(document: &str) -> Result<Self, CatalogueSeedError> {
        let document: CatalogueSeedDocument =
            serde_json::from_str(document).map_err(|err| CatalogueSeedError::Malformed {
                message: err.to_string(),
            })?;

        let declared = document
            .types
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                DonutTypeName::new(name)
                    .map_err(|source| CatalogueSeedError::InvalidType { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let donuts = document
            .donuts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                NewDonut::new(draft)
                    .map_err(|source| CatalogueSeedError::InvalidDonut { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        let types = declared
            .into_iter()
            .chain(donuts.iter().map(|donut| donut.type_name().clone()))
            .filter(|name| seen.insert(name.clone()))
            .collect();

        Ok(Self { types, donuts })
    }

    /// The demo catalogue bundled with the application.
    pub fn demo() -> Result<Self, CatalogueSeedError> {
        Self::from_json(DEMO_CATALOGUE)
    }

    /// Type names in creation order.
    pub fn types(&self) -> &[DonutTypeName] {
        &self.types
    }

    /// Donuts in creation order.
    pub fn donuts(&self) -> &[NewDonut] {
        &self.donuts
    }
}

/// Counts reported after applying a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub types_created: usize,
    pub types_reused: usize,
    pub donuts_created: usize,
}

/// Apply `seed` through the administrative port.
///
/// # Errors
///
/// Propagates the first repository failure other than a duplicate type name.
pub async fn seed_catalogue<A>(
    admin: &A,
    seed: &CatalogueSeed,
) -> Result<SeedReport, CatalogueAdminRepositoryError>
where
    A: CatalogueAdminRepository + ?Sized,
{
    let mut report = SeedReport::default();

    for name in seed.types() {
        match admin.create_type(name).await {
            Ok(_) => report.types_created += 1,
            Err(CatalogueAdminRepositoryError::DuplicateType { .. }) => {
                debug!(donut_type = %name, "donut type already present");
                report.types_reused += 1;
            }
            Err(err) => return Err(err),
        }
    }

    for donut in seed.donuts() {
        admin.create_donut(donut).await?;
        report.donuts_created += 1;
    }

    info!(
        types_created = report.types_created,
        types_reused = report.types_reused,
        donuts_created = report.donuts_created,
        "catalogue seed applied"
    );
    Ok(report)
}

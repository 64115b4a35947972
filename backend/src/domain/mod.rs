//! Domain primitives, ports and services.
//!
//! Purpose: define the donut catalogue entities and the use-cases the HTTP
//! and admin surfaces drive. Types validate on construction; adapters only
//! see already-valid values.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: per-request correlation identifier.
//! - Donut, DonutType and friends: catalogue entities.
//! - CataloguePageService: assembles the storefront listing.
//! - CatalogueSeed / seed_catalogue: bulk catalogue loading.

pub mod catalogue;
pub mod error;
pub mod ports;

mod catalogue_page_service;
mod catalogue_seed;
mod trace_id;

pub use self::catalogue::{
    CatalogueValidationError, Donut, DonutDraft, DonutType, DonutTypeName, IMAGE_URL_MAX_CHARS,
    ImageUrl, NAME_MAX_CHARS, NewDonut, NewDonutDraft, Price, TypeFilter,
};
pub use self::catalogue_page_service::CataloguePageService;
pub use self::catalogue_seed::{CatalogueSeed, CatalogueSeedError, SeedReport, seed_catalogue};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

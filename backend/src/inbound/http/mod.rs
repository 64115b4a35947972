//! HTTP inbound adapter serving the storefront pages and health probes.

pub mod error;
pub mod health;
pub mod pages;
pub mod state;
pub mod templates;

pub use error::ApiResult;

//! Donut shop storefront library.
//!
//! - [`domain`]: catalogue entities, ports and use-cases.
//! - [`inbound`]: actix-web handlers, templates and error mapping.
//! - [`outbound`]: PostgreSQL and in-memory catalogue adapters.
//! - [`middleware`]: request tracing.
//! - [`settings`]: server configuration.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use domain::TraceId;
pub use middleware::Trace;

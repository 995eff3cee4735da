//! User directory backend.
//!
//! Layout follows ports and adapters:
//!
//! - [`domain`]: user model, error type, ports and the CRUD service
//! - [`inbound`]: actix-web handlers for `/users` and health probes
//! - [`outbound`]: in-memory and PostgreSQL repository adapters
//! - [`middleware`]: request tracing
//! - [`settings`]: layered configuration

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

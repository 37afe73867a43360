//! Account deletion service.
//!
//! A single HTTP endpoint accepts `{"user":{"id":"..."}}` and deletes that
//! account through the identity platform's admin API. The crate follows a
//! ports-and-adapters layout:
//!
//! - [`domain`] holds the user id, admin API configuration, the deletion
//!   use case and its ports.
//! - [`inbound`] adapts HTTP requests onto the deletion port.
//! - [`outbound`] calls the admin API over HTTPS.
//! - [`config`] loads secrets and listener settings.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

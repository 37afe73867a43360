//! Domain primitives, use-cases, and ports.
//!
//! Purpose: keep the deletion flow independent of HTTP frameworks and of the
//! identity platform's wire format. Inbound adapters call
//! [`ports::AccountDeletionCommand`]; outbound adapters implement
//! [`ports::IdentityAdmin`].
//!
//! Public surface:
//! - `UserId`: identity platform user identifier, kept verbatim.
//! - `AdminApiConfig` / `AdminApiCredentials`: service credential and base URL.
//! - `AccountDeletionService`: the deletion use-case.
//! - `TraceId`: request-scoped correlation identifier.

pub mod account_deletion;
pub mod admin_api;
pub mod ports;
pub mod trace_id;
pub mod user_id;

pub use self::account_deletion::AccountDeletionService;
pub use self::admin_api::{AdminApiConfig, AdminApiCredentials, BASE_URL_ENV, SERVICE_ROLE_KEY_ENV};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_id::{UserId, UserIdValidationError};

//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **identity_admin**: reqwest client for the identity platform admin API
//!
//! Adapters translate between domain types and wire representations. They
//! contain no business logic.

pub mod identity_admin;

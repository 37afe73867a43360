//! Identity platform admin API adapters.
//!
//! This module provides a thin HTTP implementation of the `IdentityAdmin`
//! port.

mod http_client;

pub use http_client::{ADMIN_USERS_PATH, IdentityAdminHttpClient, admin_user_url};

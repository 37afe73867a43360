//! Process configuration.
//!
//! Admin API secrets are read through [`mockable::Env`] so tests never touch
//! the real process environment. Listener settings are layered by
//! OrthoConfig (CLI, environment, config file).

pub mod fingerprint;
mod server;

use mockable::Env;

use crate::domain::{AdminApiConfig, BASE_URL_ENV, SERVICE_ROLE_KEY_ENV};

pub use server::ServerSettings;

/// Read the admin API settings from `env`.
///
/// Absent or empty variables yield an incomplete [`AdminApiConfig`]; the
/// deletion flow reports them per request instead of refusing to start.
///
/// # Examples
///
/// ```rust
/// use delete_user_service::config::admin_api_config_from_env;
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "SUPABASE_SERVICE_ROLE_KEY" => Some("service-key".to_owned()),
///     "SUPABASE_URL" => Some("https://project.supabase.co".to_owned()),
///     _ => None,
/// });
///
/// let config = admin_api_config_from_env(&env);
/// assert!(config.credentials().is_ok());
/// ```
pub fn admin_api_config_from_env<E: Env>(env: &E) -> AdminApiConfig {
    AdminApiConfig::new(env.string(SERVICE_ROLE_KEY_ENV), env.string(BASE_URL_ENV))
}

//! HTTP server configuration object.

use delete_user_service::config::ServerSettings;
use delete_user_service::domain::AdminApiConfig;

/// Everything `create_server` needs, resolved before the listener starts.
pub struct ServerConfig {
    pub(crate) admin_api: AdminApiConfig,
    pub(crate) bind_target: (String, u16),
}

impl ServerConfig {
    /// Combine listener settings with the admin API configuration.
    #[must_use]
    pub fn new(settings: &ServerSettings, admin_api: AdminApiConfig) -> Self {
        Self {
            admin_api,
            bind_target: settings.bind_target(),
        }
    }
}

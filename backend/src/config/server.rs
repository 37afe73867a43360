//! Listener configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Settings controlling where the HTTP server listens.
///
/// Environment variables use the `DELETE_USER_` prefix, for example
/// `DELETE_USER_PORT=9000`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DELETE_USER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to `8080`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Address tuple accepted by `HttpServer::bind`.
    pub fn bind_target(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("delete-user")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("DELETE_USER_HOST", None::<String>),
            ("DELETE_USER_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(
            settings.bind_target(),
            (DEFAULT_HOST.to_owned(), DEFAULT_PORT)
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("DELETE_USER_HOST", Some("127.0.0.1".to_owned())),
            ("DELETE_USER_PORT", Some("9000".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_target(), ("127.0.0.1".to_owned(), 9000));
    }
}

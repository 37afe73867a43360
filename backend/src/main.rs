//! Service entry-point: loads configuration, wires the deletion endpoint and
//! starts the HTTP server.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use delete_user_service::config::fingerprint::secret_fingerprint;
use delete_user_service::config::{ServerSettings, admin_api_config_from_env};
use delete_user_service::domain::AdminApiConfig;
use delete_user_service::inbound::http::health::HealthState;
use server::{ServerConfig, create_server, drain_on_shutdown_signal};

fn log_admin_api_config(config: &AdminApiConfig) {
    let missing = config.missing();
    if !missing.is_empty() {
        warn!(
            missing = ?missing,
            "admin API configuration incomplete; deletions will fail until it is provided"
        );
        return;
    }
    if let Some(key) = config.service_role_key() {
        info!(
            fingerprint = %secret_fingerprint(key),
            base_url = config.base_url().unwrap_or_default(),
            "admin API configured"
        );
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load server settings: {e}")))?;
    let admin_api = admin_api_config_from_env(&DefaultEnv::new());
    log_admin_api_config(&admin_api);

    let (host, port) = settings.bind_target();
    info!(%host, port, "starting account deletion service");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(&settings, admin_api))?;
    actix_web::rt::spawn(drain_on_shutdown_signal(health_state, server.handle()));
    server.await
}

//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use delete_user_service::Trace;
#[cfg(debug_assertions)]
use delete_user_service::doc::ApiDoc;
use delete_user_service::domain::AccountDeletionService;
use delete_user_service::inbound::http::delete_user;
use delete_user_service::inbound::http::health::{HealthState, live, ready};
use delete_user_service::inbound::http::state::HttpState;
use delete_user_service::outbound::identity_admin::IdentityAdminHttpClient;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(ready)
        .service(live)
        .configure(delete_user::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server for the deletion endpoint.
///
/// The admin API client is shared by every worker; readiness is flipped once
/// the listener is bound. OS signals are not handled here; spawn
/// [`drain_on_shutdown_signal`] with the server handle.
///
/// # Errors
/// Propagates [`std::io::Error`] when the HTTP client cannot be built or
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        admin_api,
        bind_target,
    } = config;

    let admin = IdentityAdminHttpClient::new()
        .map_err(|e| std::io::Error::other(format!("admin API client setup failed: {e}")))?;
    let admin = Arc::new(admin);
    let deletion = AccountDeletionService::new(admin_api, admin);
    let http_state = web::Data::new(HttpState::new(Arc::new(deletion)));

    let server_health_state = health_state.clone();
    // Shutdown signals are handled by `drain_on_shutdown_signal`.
    let server = HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
        .disable_signals()
        .bind(bind_target)?
        .run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness probes, then stop the server gracefully so in-flight
/// deletions complete.
pub async fn drain(health_state: web::Data<HealthState>, handle: ServerHandle) {
    health_state.mark_unhealthy();
    handle.stop(true).await;
}

/// Wait for Ctrl-C or SIGTERM, then [`drain`] the server.
pub async fn drain_on_shutdown_signal(health_state: web::Data<HealthState>, handle: ServerHandle) {
    shutdown_signal().await;
    info!("shutdown signal received; draining");
    drain(health_state, handle).await;
}

async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut terminate) => {
            tokio::select! {
                () = ctrl_c() => {}
                _ = terminate.recv() => {}
            }
        }
        Err(error) => {
            warn!(%error, "cannot listen for SIGTERM");
            ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    ctrl_c().await;
}

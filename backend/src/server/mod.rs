//! Server construction and middleware wiring.

mod config;
mod settings;

pub use config::ServerConfig;
pub use settings::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use taskboard::Trace;
#[cfg(debug_assertions)]
use taskboard::doc::ApiDoc;
use taskboard::domain::TaskBoardService;
use taskboard::domain::ports::DataStore;
use taskboard::inbound::http::health::HealthState;
use taskboard::inbound::http::routes;
use taskboard::inbound::http::state::HttpState;
use taskboard::outbound::memory::InMemoryDataStore;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Resolve the store the server runs on.
///
/// # Errors
/// Returns [`std::io::Error`] if the seed data fails validation.
fn build_store(config: &ServerConfig) -> std::io::Result<Arc<dyn DataStore>> {
    if let Some(store) = &config.store {
        return Ok(store.clone());
    }
    let store = InMemoryDataStore::seeded()
        .map_err(|e| std::io::Error::other(format!("store seeding failed: {e}")))?;
    Ok(Arc::new(store))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    // Cross-origin reads only; preflight requests are not answered.
    let cors = DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"));

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(cors)
        .wrap(Trace)
        .configure(routes::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is bound.
/// - `config`: pre-built [`ServerConfig`] with the bind address and optional store.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding, binding the socket or starting
/// the server fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let store = build_store(&config)?;
    let http_state = web::Data::new(HttpState::from_service(TaskBoardService::new(store)));
    let ServerConfig {
        bind_addr,
        store: _,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?;

    for addr in server.addrs() {
        info!(%addr, "listening");
    }
    let server = server.run();

    health_state.mark_ready();
    Ok(server)
}

/// Fail liveness, then stop accepting connections and let in-flight
/// requests finish.
pub async fn drain(handle: &ServerHandle, health_state: &HealthState) {
    health_state.mark_unhealthy();
    info!("draining connections");
    handle.stop(true).await;
}

/// Wait for SIGINT or SIGTERM and then [`drain`] the server.
///
/// Actix's own signal handling is disabled in [`create_server`] so liveness
/// flips before the listener closes.
pub async fn drain_on_shutdown_signal(
    handle: ServerHandle,
    health_state: web::Data<HealthState>,
) {
    if let Err(error) = shutdown_signal().await {
        warn!(%error, "cannot listen for shutdown signals");
        return;
    }
    drain(&handle, &health_state).await;
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

#[cfg(test)]
mod tests;

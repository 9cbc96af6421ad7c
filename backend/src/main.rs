//! Taskboard entry-point: loads settings, wires REST endpoints and OpenAPI docs.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use ortho_config::OrthoConfig;
use server::{ServerConfig, ServerSettings, create_server, drain_on_shutdown_signal};
use taskboard::inbound::http::health::HealthState;

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
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr()?;
    info!(%bind_addr, "starting taskboard");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), ServerConfig::new(bind_addr))?;
    actix_web::rt::spawn(drain_on_shutdown_signal(server.handle(), health_state));
    server.await
}

//! City info entry-point: loads settings, wires the REST endpoints and OpenAPI
//! docs, and runs the server.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use city_info::AppSettings;
use city_info::inbound::http::health::HealthState;
use server::{ServerConfig, create_server};

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

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        std::io::Error::other(format!("invalid bind address {}: {e}", settings.host()))
    })?;
    let config = ServerConfig::new(bind_addr, settings.mail_to(), settings.mail_from());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}

//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use city_info::Trace;
#[cfg(debug_assertions)]
use city_info::doc::ApiDoc;
use city_info::domain::CityInfoService;
use city_info::inbound::http::configure_api;
use city_info::inbound::http::health::{HealthState, live, ready};
use city_info::inbound::http::state::HttpState;
use city_info::outbound::mail::LoggingMailNotifier;
use city_info::outbound::memory::InMemoryCityRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use std::future::Future;
use std::sync::Arc;

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = CityInfoService::new(
        Arc::new(InMemoryCityRepository::seeded()),
        Arc::new(LoggingMailNotifier::new(
            config.mail_to.as_str(),
            config.mail_from.as_str(),
        )),
    );
    web::Data::new(HttpState::from_service(Arc::new(service)))
}

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
        .configure(configure_api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// The store is created here and shared by every worker, so all workers see
/// the same cities.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    info!(%bind_addr, "server listening");
    health_state.mark_ready();
    actix_web::rt::spawn(drain_on_signal(health_state, tokio::signal::ctrl_c()));
    Ok(server)
}

/// Fail liveness once `signal` resolves so orchestrators stop routing
/// traffic while the server drains in-flight requests.
async fn drain_on_signal<S>(health_state: web::Data<HealthState>, signal: S)
where
    S: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!(error = %e, "shutdown signal listener failed");
        return;
    }
    info!("shutdown requested; draining");
    health_state.mark_unhealthy();
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn signal_marks_process_not_alive() {
        let health_state = web::Data::new(HealthState::new());

        drain_on_signal(health_state.clone(), std::future::ready(Ok(()))).await;

        assert!(!health_state.is_alive());
    }

    #[rstest]
    #[tokio::test]
    async fn failed_listener_keeps_process_alive() {
        let health_state = web::Data::new(HealthState::new());

        drain_on_signal(
            health_state.clone(),
            std::future::ready(Err(std::io::Error::other("no signal support"))),
        )
        .await;

        assert!(health_state.is_alive());
    }
}

//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod cities;
pub mod error;
pub mod health;
pub mod points_of_interest;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

use self::points_of_interest::{COLLECTION_SEGMENTS, points_of_interest_scope};

/// Register extractor configuration and every `/api` route.
///
/// Handlers expect a `web::Data<HttpState>` to be registered on the app.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use city_info::domain::CityInfoService;
/// use city_info::domain::ports::NoOpMailNotifier;
/// use city_info::inbound::http::configure_api;
/// use city_info::inbound::http::state::HttpState;
/// use city_info::outbound::memory::InMemoryCityRepository;
///
/// let service = CityInfoService::new(
///     Arc::new(InMemoryCityRepository::seeded()),
///     Arc::new(NoOpMailNotifier),
/// );
/// let state = web::Data::new(HttpState::from_service(Arc::new(service)));
/// let _app = App::new().app_data(state).configure(configure_api);
/// ```
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    let mut api = web::scope("/api")
        .service(cities::list_cities)
        .service(cities::get_city);
    for segment in COLLECTION_SEGMENTS {
        api = api.service(points_of_interest_scope(&format!(
            "/cities/{{city_id}}/{segment}"
        )));
    }

    cfg.app_data(validation::json_config())
        .app_data(validation::path_config())
        .app_data(validation::query_config())
        .service(api);
}

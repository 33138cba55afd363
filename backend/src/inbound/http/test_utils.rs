//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::domain::ports::MailNotifier;
use crate::domain::{City, CityId, CityInfoService, PointOfInterest, PointOfInterestFields, PointOfInterestId};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryCityRepository;

fn point_of_interest(id: u32, name: &str, description: &str) -> PointOfInterest {
    PointOfInterest::new(
        PointOfInterestId::new(id),
        PointOfInterestFields::new_unchecked(name, description),
    )
}

/// City 1 owns points {1, 2}; city 2 owns point {3}.
pub fn fixture_cities() -> Vec<City> {
    vec![
        City::new(
            CityId::new(1),
            "New York City",
            "The one with that big park.",
            vec![
                point_of_interest(1, "Central Park", "Big park."),
                point_of_interest(2, "Empire State Building", "Tall building."),
            ],
        ),
        City::new(
            CityId::new(2),
            "Antwerp",
            "The one with the cathedral.",
            vec![point_of_interest(3, "Cathedral of Our Lady", "Gothic cathedral.")],
        ),
    ]
}

/// Build handler state over an in-memory store holding [`fixture_cities`].
pub fn fixture_state<M>(mail: M) -> web::Data<HttpState>
where
    M: MailNotifier + 'static,
{
    let service = CityInfoService::new(
        Arc::new(InMemoryCityRepository::new(fixture_cities())),
        Arc::new(mail),
    );
    web::Data::new(HttpState::from_service(Arc::new(service)))
}

/// Build an application exposing the full `/api` surface over `state`.
pub fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).configure(configure_api)
}

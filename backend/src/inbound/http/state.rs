//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without the store.

use std::sync::Arc;

use crate::domain::ports::{CitiesQuery, PointsOfInterestCommand, PointsOfInterestQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// City listing and lookup.
    pub cities: Arc<dyn CitiesQuery>,
    /// Point-of-interest reads.
    pub points_of_interest: Arc<dyn PointsOfInterestQuery>,
    /// Point-of-interest writes.
    pub points_of_interest_command: Arc<dyn PointsOfInterestCommand>,
}

impl HttpState {
    /// Construct state from individual ports.
    pub fn new(
        cities: Arc<dyn CitiesQuery>,
        points_of_interest: Arc<dyn PointsOfInterestQuery>,
        points_of_interest_command: Arc<dyn PointsOfInterestCommand>,
    ) -> Self {
        Self {
            cities,
            points_of_interest,
            points_of_interest_command,
        }
    }

    /// Construct state from one service implementing every port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use city_info::domain::CityInfoService;
    /// use city_info::domain::ports::NoOpMailNotifier;
    /// use city_info::inbound::http::state::HttpState;
    /// use city_info::outbound::memory::InMemoryCityRepository;
    ///
    /// let service = CityInfoService::new(
    ///     Arc::new(InMemoryCityRepository::seeded()),
    ///     Arc::new(NoOpMailNotifier),
    /// );
    /// let state = HttpState::from_service(Arc::new(service));
    /// let _cities = state.cities.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: CitiesQuery + PointsOfInterestQuery + PointsOfInterestCommand + 'static,
    {
        Self {
            cities: service.clone(),
            points_of_interest: service.clone(),
            points_of_interest_command: service,
        }
    }
}

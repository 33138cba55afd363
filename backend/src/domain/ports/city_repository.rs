//! Port for the city store.
//!
//! The store owns every [`City`] and the points of interest beneath them.
//! Point ids are allocated by the store from a single sequence spanning all
//! cities, so allocation and insertion must happen under one critical
//! section.

use async_trait::async_trait;

use crate::domain::{City, CityId, PointOfInterest, PointOfInterestFields, PointOfInterestId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by city store adapters.
    pub enum CityRepositoryError {
        /// The store could not be accessed.
        Unavailable {
            /// Adapter-specific failure detail.
            message: String,
        } => "city store unavailable: {message}",
        /// Every point-of-interest id has been allocated.
        IdsExhausted => "point-of-interest ids exhausted",
    }
}

/// Port for reading and mutating cities and their points of interest.
///
/// Mutations return `Ok(None)` when the addressed city (or point of interest)
/// does not exist; errors are reserved for store failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// All cities in store order.
    async fn list_cities(&self) -> Result<Vec<City>, CityRepositoryError>;

    /// The city with `id`, if any.
    async fn find_city(&self, id: CityId) -> Result<Option<City>, CityRepositoryError>;

    /// Append a point of interest to a city.
    ///
    /// The new id is one more than the largest point-of-interest id across
    /// every city in the store.
    async fn insert_point_of_interest(
        &self,
        city_id: CityId,
        fields: PointOfInterestFields,
    ) -> Result<Option<PointOfInterest>, CityRepositoryError>;

    /// Overwrite name and description of an existing point of interest.
    async fn update_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        fields: PointOfInterestFields,
    ) -> Result<Option<PointOfInterest>, CityRepositoryError>;

    /// Detach a point of interest from its city, returning it.
    async fn remove_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<Option<PointOfInterest>, CityRepositoryError>;
}

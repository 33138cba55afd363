//! Driving port for reading the points of interest of a city.

use async_trait::async_trait;

use crate::domain::{CityId, Error, PointOfInterest, PointOfInterestId};

/// Domain use-case port for point-of-interest reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsOfInterestQuery: Send + Sync {
    /// The ordered points of interest of a city, or not-found when the city
    /// does not exist.
    async fn list_points_of_interest(&self, city_id: CityId)
    -> Result<Vec<PointOfInterest>, Error>;

    /// A single point of interest, or not-found when either the city or the
    /// point is missing.
    async fn fetch_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<PointOfInterest, Error>;
}

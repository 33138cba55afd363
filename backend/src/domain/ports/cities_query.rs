//! Driving port for read-only city lookups.

use async_trait::async_trait;

use crate::domain::{City, CityId, Error};

/// Domain use-case port for listing and fetching cities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CitiesQuery: Send + Sync {
    /// Every city in store order.
    async fn list_cities(&self) -> Result<Vec<City>, Error>;

    /// The city with `id`, or a not-found error.
    async fn fetch_city(&self, id: CityId) -> Result<City, Error>;
}

//! In-memory city store.
//!
//! One mutex guards every city, so allocating a point-of-interest id and
//! appending the point are a single critical section. The lock is never held
//! across an `.await`.

mod seed;

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

pub use seed::seed_cities;

use crate::domain::ports::{CityRepository, CityRepositoryError};
use crate::domain::{City, CityId, PointOfInterest, PointOfInterestFields, PointOfInterestId};

/// Process-local [`CityRepository`].
///
/// # Examples
/// ```
/// use city_info::outbound::memory::InMemoryCityRepository;
///
/// let repository = InMemoryCityRepository::seeded();
/// # let _ = repository;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCityRepository {
    cities: Mutex<Vec<City>>,
}

impl InMemoryCityRepository {
    /// Build a store holding `cities` in the given order.
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities: Mutex::new(cities),
        }
    }

    /// Build a store holding the fixed seed data.
    pub fn seeded() -> Self {
        Self::new(seed_cities())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<City>>, CityRepositoryError> {
        self.cities
            .lock()
            .map_err(|err| CityRepositoryError::unavailable(err.to_string()))
    }
}

/// Next free point-of-interest id across every city.
///
/// An empty store starts the sequence at 1.
fn next_point_of_interest_id(
    cities: &[City],
) -> Result<PointOfInterestId, CityRepositoryError> {
    match cities.iter().filter_map(City::max_point_of_interest_id).max() {
        None => Ok(PointOfInterestId::new(1)),
        Some(max) => max.next().ok_or_else(CityRepositoryError::ids_exhausted),
    }
}

fn city_mut(cities: &mut [City], id: CityId) -> Option<&mut City> {
    cities.iter_mut().find(|city| city.id() == id)
}

#[async_trait]
impl CityRepository for InMemoryCityRepository {
    async fn list_cities(&self) -> Result<Vec<City>, CityRepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn find_city(&self, id: CityId) -> Result<Option<City>, CityRepositoryError> {
        Ok(self.lock()?.iter().find(|city| city.id() == id).cloned())
    }

    async fn insert_point_of_interest(
        &self,
        city_id: CityId,
        fields: PointOfInterestFields,
    ) -> Result<Option<PointOfInterest>, CityRepositoryError> {
        let mut cities = self.lock()?;
        let id = next_point_of_interest_id(&cities);
        let Some(city) = city_mut(&mut cities, city_id) else {
            return Ok(None);
        };
        let created = PointOfInterest::new(id?, fields);
        city.push_point_of_interest(created.clone());
        Ok(Some(created))
    }

    async fn update_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        fields: PointOfInterestFields,
    ) -> Result<Option<PointOfInterest>, CityRepositoryError> {
        let mut cities = self.lock()?;
        let Some(point_of_interest) =
            city_mut(&mut cities, city_id).and_then(|city| city.point_of_interest_mut(id))
        else {
            return Ok(None);
        };
        point_of_interest.overwrite(fields);
        Ok(Some(point_of_interest.clone()))
    }

    async fn remove_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<Option<PointOfInterest>, CityRepositoryError> {
        let mut cities = self.lock()?;
        Ok(city_mut(&mut cities, city_id).and_then(|city| city.remove_point_of_interest(id)))
    }
}

#[cfg(test)]
mod tests;

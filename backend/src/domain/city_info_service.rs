//! City and point-of-interest domain service.
//!
//! Implements the driving ports on top of the [`CityRepository`] and
//! [`MailNotifier`] driven ports. Validation happens here, before the store
//! is touched, so adapters only ever see validated fields.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    CitiesQuery, CityRepository, CityRepositoryError, MailNotifier, PointsOfInterestCommand,
    PointsOfInterestQuery,
};
use crate::domain::{
    City, CityId, Error, PatchDocument, PointOfInterest, PointOfInterestDraft, PointOfInterestId,
};

/// Subject line of the mail sent after a point of interest is deleted.
pub const DELETED_MAIL_SUBJECT: &str = "Point of interest deleted.";

fn deleted_mail_message(point_of_interest: &PointOfInterest) -> String {
    format!(
        "Point of interest {} with id {} was deleted.",
        point_of_interest.name(),
        point_of_interest.id()
    )
}

fn city_not_found(city_id: CityId) -> Error {
    info!(city_id = %city_id, "city not found");
    Error::not_found(format!("city {city_id} not found"))
}

fn point_of_interest_not_found(city_id: CityId, id: PointOfInterestId) -> Error {
    info!(city_id = %city_id, point_of_interest_id = %id, "point of interest not found");
    Error::not_found(format!("point of interest {id} not found in city {city_id}"))
}

/// Service backing the cities and points-of-interest endpoints.
#[derive(Clone)]
pub struct CityInfoService<R, M> {
    cities: Arc<R>,
    mail: Arc<M>,
}

impl<R, M> CityInfoService<R, M> {
    /// Create a new service over the given store and notifier.
    pub fn new(cities: Arc<R>, mail: Arc<M>) -> Self {
        Self { cities, mail }
    }
}

impl<R, M> CityInfoService<R, M>
where
    R: CityRepository,
    M: MailNotifier,
{
    fn map_repository_error(error: CityRepositoryError) -> Error {
        error!(error = %error, "city store failure");
        match error {
            CityRepositoryError::Unavailable { message } => {
                Error::internal(format!("city store unavailable: {message}"))
            }
            CityRepositoryError::IdsExhausted => {
                Error::internal("point-of-interest ids exhausted")
            }
        }
    }

    async fn require_city(&self, city_id: CityId) -> Result<City, Error> {
        self.cities
            .find_city(city_id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| city_not_found(city_id))
    }

    async fn require_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<PointOfInterest, Error> {
        let city = self.require_city(city_id).await?;
        city.point_of_interest(id)
            .cloned()
            .ok_or_else(|| point_of_interest_not_found(city_id, id))
    }

    async fn notify_deleted(&self, point_of_interest: &PointOfInterest) {
        let message = deleted_mail_message(point_of_interest);
        if let Err(err) = self.mail.send(DELETED_MAIL_SUBJECT, &message).await {
            warn!(
                error = %err,
                point_of_interest_id = %point_of_interest.id(),
                "deletion notice could not be sent"
            );
        }
    }
}

#[async_trait]
impl<R, M> CitiesQuery for CityInfoService<R, M>
where
    R: CityRepository,
    M: MailNotifier,
{
    async fn list_cities(&self) -> Result<Vec<City>, Error> {
        self.cities
            .list_cities()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn fetch_city(&self, id: CityId) -> Result<City, Error> {
        self.require_city(id).await
    }
}

#[async_trait]
impl<R, M> PointsOfInterestQuery for CityInfoService<R, M>
where
    R: CityRepository,
    M: MailNotifier,
{
    async fn list_points_of_interest(
        &self,
        city_id: CityId,
    ) -> Result<Vec<PointOfInterest>, Error> {
        let city = self.require_city(city_id).await?;
        Ok(city.into_points_of_interest())
    }

    async fn fetch_point_of_interest(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
    ) -> Result<PointOfInterest, Error> {
        self.require_point_of_interest(city_id, id).await
    }
}

#[async_trait]
impl<R, M> PointsOfInterestCommand for CityInfoService<R, M>
where
    R: CityRepository,
    M: MailNotifier,
{
    async fn create(
        &self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, Error> {
        let fields = draft.validate()?;
        let created = self
            .cities
            .insert_point_of_interest(city_id, fields)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| city_not_found(city_id))?;
        info!(
            city_id = %city_id,
            point_of_interest_id = %created.id(),
            "point of interest created"
        );
        Ok(created)
    }

    async fn replace(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        draft: PointOfInterestDraft,
    ) -> Result<(), Error> {
        let fields = draft.validate()?;
        self.require_city(city_id).await?;
        self.cities
            .update_point_of_interest(city_id, id, fields)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| point_of_interest_not_found(city_id, id))?;
        Ok(())
    }

    async fn patch(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        document: PatchDocument,
    ) -> Result<(), Error> {
        let current = self.require_point_of_interest(city_id, id).await?;
        let mut working_copy = current.to_draft();
        document.apply_to(&mut working_copy)?;
        let fields = working_copy.validate()?;
        self.cities
            .update_point_of_interest(city_id, id, fields)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| point_of_interest_not_found(city_id, id))?;
        Ok(())
    }

    async fn delete(&self, city_id: CityId, id: PointOfInterestId) -> Result<(), Error> {
        self.require_city(city_id).await?;
        let removed = self
            .cities
            .remove_point_of_interest(city_id, id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| point_of_interest_not_found(city_id, id))?;
        self.notify_deleted(&removed).await;
        Ok(())
    }
}

#[cfg(test)]
#[path = "city_info_service_tests.rs"]
mod tests;

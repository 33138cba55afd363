//! Driving port for point-of-interest mutations.
//!
//! Each operation validates its input before the store is touched. Failed
//! operations leave the stored point of interest unchanged.

use async_trait::async_trait;

use crate::domain::{
    CityId, Error, PatchDocument, PointOfInterest, PointOfInterestDraft, PointOfInterestId,
};

/// Domain use-case port for creating, replacing, patching and deleting
/// points of interest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsOfInterestCommand: Send + Sync {
    /// Validate `draft` and append it to the city under a fresh store-wide id.
    async fn create(
        &self,
        city_id: CityId,
        draft: PointOfInterestDraft,
    ) -> Result<PointOfInterest, Error>;

    /// Validate `draft` and overwrite the name and description in place.
    async fn replace(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        draft: PointOfInterestDraft,
    ) -> Result<(), Error>;

    /// Apply `document` to a working copy, validate it, then commit.
    async fn patch(
        &self,
        city_id: CityId,
        id: PointOfInterestId,
        document: PatchDocument,
    ) -> Result<(), Error>;

    /// Remove the point of interest and notify by mail.
    async fn delete(&self, city_id: CityId, id: PointOfInterestId) -> Result<(), Error>;
}

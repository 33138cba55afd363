//! City aggregate.
//!
//! A city exclusively owns an ordered list of points of interest. Point ids
//! are allocated from a store-wide sequence, so the aggregate never assigns
//! them itself; see [`crate::domain::ports::CityRepository`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{PointOfInterest, PointOfInterestId};

/// Stable identifier of a city, assigned at seed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(u32);

impl CityId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A city and the points of interest it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    id: CityId,
    name: String,
    description: String,
    points_of_interest: Vec<PointOfInterest>,
}

impl City {
    /// Build a city with an initial list of points of interest.
    pub fn new(
        id: CityId,
        name: impl Into<String>,
        description: impl Into<String>,
        points_of_interest: Vec<PointOfInterest>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            points_of_interest,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> CityId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Display description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Points of interest in insertion order.
    pub fn points_of_interest(&self) -> &[PointOfInterest] {
        &self.points_of_interest
    }

    /// Consume the city, yielding its points of interest.
    pub fn into_points_of_interest(self) -> Vec<PointOfInterest> {
        self.points_of_interest
    }

    /// Find an owned point of interest by id.
    pub fn point_of_interest(&self, id: PointOfInterestId) -> Option<&PointOfInterest> {
        self.points_of_interest.iter().find(|poi| poi.id() == id)
    }

    /// Mutable access to an owned point of interest.
    pub fn point_of_interest_mut(&mut self, id: PointOfInterestId) -> Option<&mut PointOfInterest> {
        self.points_of_interest
            .iter_mut()
            .find(|poi| poi.id() == id)
    }

    /// Append a point of interest to the end of the list.
    pub fn push_point_of_interest(&mut self, point_of_interest: PointOfInterest) {
        self.points_of_interest.push(point_of_interest);
    }

    /// Detach a point of interest, preserving the order of the rest.
    pub fn remove_point_of_interest(&mut self, id: PointOfInterestId) -> Option<PointOfInterest> {
        let index = self
            .points_of_interest
            .iter()
            .position(|poi| poi.id() == id)?;
        Some(self.points_of_interest.remove(index))
    }

    /// Highest point-of-interest id owned by this city.
    pub fn max_point_of_interest_id(&self) -> Option<PointOfInterestId> {
        self.points_of_interest.iter().map(PointOfInterest::id).max()
    }
}

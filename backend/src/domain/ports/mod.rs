//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`CitiesQuery`], [`PointsOfInterestQuery`],
//! [`PointsOfInterestCommand`]) are what inbound adapters call. Driven ports
//! ([`CityRepository`], [`MailNotifier`]) are what outbound adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod cities_query;
mod city_repository;
mod mail_notifier;
mod points_of_interest_command;
mod points_of_interest_query;

pub use cities_query::CitiesQuery;
#[cfg(test)]
pub use cities_query::MockCitiesQuery;
pub use city_repository::{CityRepository, CityRepositoryError};
#[cfg(test)]
pub use city_repository::MockCityRepository;
pub use mail_notifier::{MailNotifier, MailNotifierError, NoOpMailNotifier};
#[cfg(test)]
pub use mail_notifier::MockMailNotifier;
pub use points_of_interest_command::PointsOfInterestCommand;
#[cfg(test)]
pub use points_of_interest_command::MockPointsOfInterestCommand;
pub use points_of_interest_query::PointsOfInterestQuery;
#[cfg(test)]
pub use points_of_interest_query::MockPointsOfInterestQuery;

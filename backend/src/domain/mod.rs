//! Domain primitives, aggregates and services.
//!
//! Purpose: define the city and point-of-interest model, its validation
//! rules and the services behind the driving ports. Nothing in here depends
//! on the web framework.
//!
//! Public surface:
//! - City / CityId — aggregate owning an ordered list of points of interest.
//! - PointOfInterest / PointOfInterestId — store-wide unique sub-resource.
//! - PointOfInterestDraft — unvalidated write input; validates into
//!   PointOfInterestFields.
//! - PatchDocument — ordered field-level operations for partial updates.
//! - Error / ErrorCode — transport-agnostic failure payload.

pub mod city;
pub mod city_info_service;
pub mod error;
pub mod patch;
pub mod point_of_interest;
pub mod ports;
pub mod trace_id;
pub mod validation;

pub use self::city::{City, CityId};
pub use self::city_info_service::{CityInfoService, DELETED_MAIL_SUBJECT};
pub use self::error::{Error, ErrorCode};
pub use self::patch::{PatchDocument, PatchField, PatchOperation};
pub use self::point_of_interest::{
    DESCRIPTION_EQUALS_NAME, DESCRIPTION_MAX, NAME_MAX, PointOfInterest, PointOfInterestDraft,
    PointOfInterestFields, PointOfInterestId,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::ValidationErrors;

//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: All HTTP endpoints from the inbound layer (cities, points of
//!   interest, health)
//! - **Schemas**: Domain type wrappers ([`ErrorSchema`], [`ErrorCodeSchema`],
//!   [`PatchOperationSchema`]) that provide OpenAPI definitions without
//!   coupling domain types to the utoipa framework
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::cities::CityResponse;
use crate::inbound::http::points_of_interest::{PointOfInterestRequest, PointOfInterestResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, PatchOperationSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "City info API",
        description = "Cities and the points of interest they own.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cities::list_cities,
        crate::inbound::http::cities::get_city,
        crate::inbound::http::points_of_interest::list_points_of_interest,
        crate::inbound::http::points_of_interest::get_point_of_interest,
        crate::inbound::http::points_of_interest::create_point_of_interest,
        crate::inbound::http::points_of_interest::replace_point_of_interest,
        crate::inbound::http::points_of_interest::patch_point_of_interest,
        crate::inbound::http::points_of_interest::delete_point_of_interest,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CityResponse,
        PointOfInterestResponse,
        PointOfInterestRequest,
        PatchOperationSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "cities", description = "City lookups"),
        (name = "points-of-interest", description = "Points of interest owned by a city"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying OpenAPI schema field structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
        assert_object_schema_has_field(error_schema, "traceId");
    }

    #[test]
    fn openapi_city_schema_reports_point_count() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let city_schema = schemas.get("CityResponse").expect("City schema");

        assert_object_schema_has_field(city_schema, "numberOfPointsOfInterest");
        assert_object_schema_has_field(city_schema, "pointsOfInterest");
    }

    #[rstest]
    #[case("/api/cities")]
    #[case("/api/cities/{id}")]
    #[case("/api/cities/{cityId}/pointsOfInterest")]
    #[case("/api/cities/{cityId}/pointsOfInterest/{id}")]
    #[case("/api/cities/{cityId}/pointsofinterest")]
    #[case("/api/cities/{cityId}/pointsofinterest/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }
}

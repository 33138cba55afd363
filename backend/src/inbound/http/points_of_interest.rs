//! Point-of-interest endpoints nested under a city.
//!
//! ```text
//! GET    /api/cities/{cityId}/pointsOfInterest
//! GET    /api/cities/{cityId}/pointsOfInterest/{id}
//! POST   /api/cities/{cityId}/pointsofinterest
//! PUT    /api/cities/{cityId}/pointsofinterest/{id}
//! PATCH  /api/cities/{cityId}/pointsofinterest/{id}
//! DELETE /api/cities/{cityId}/pointsofinterest/{id}
//! ```
//!
//! Every route is mounted under both spellings of the collection segment.

use actix_web::{
    HttpRequest, HttpResponse, Scope, delete, get, http::header, patch, post, put, web,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    CityId, PatchDocument, PointOfInterest, PointOfInterestDraft, PointOfInterestId,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_cache_header;
use crate::inbound::http::schemas::{ErrorSchema, PatchOperationSchema};
use crate::inbound::http::state::HttpState;

/// Collection path segments accepted for points of interest.
pub const COLLECTION_SEGMENTS: [&str; 2] = ["pointsOfInterest", "pointsofinterest"];

#[derive(Debug, Deserialize)]
struct CityPath {
    city_id: u32,
}

#[derive(Debug, Deserialize)]
struct PointOfInterestPath {
    city_id: u32,
    id: u32,
}

impl PointOfInterestPath {
    fn ids(&self) -> (CityId, PointOfInterestId) {
        (CityId::new(self.city_id), PointOfInterestId::new(self.id))
    }
}

/// Response payload for a point of interest.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestResponse {
    /// Store-wide unique identifier.
    #[schema(example = 1)]
    pub id: u32,
    /// Display name.
    #[schema(example = "Central Park")]
    pub name: String,
    /// Free-text description.
    #[schema(example = "The most visited urban park in the United States.")]
    pub description: String,
}

impl From<PointOfInterest> for PointOfInterestResponse {
    fn from(value: PointOfInterest) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_owned(),
            description: value.description().to_owned(),
        }
    }
}

/// Request payload for creating or replacing a point of interest.
///
/// Missing fields are treated as empty strings and reported by validation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestRequest {
    /// Required, at most 50 characters, must differ from the description.
    #[schema(example = "Statue of Liberty")]
    pub name: Option<String>,
    /// Optional, at most 200 characters.
    #[schema(example = "A colossal neoclassical sculpture on Liberty Island.")]
    pub description: Option<String>,
}

impl From<PointOfInterestRequest> for PointOfInterestDraft {
    fn from(value: PointOfInterestRequest) -> Self {
        Self::new(
            value.name.unwrap_or_default(),
            value.description.unwrap_or_default(),
        )
    }
}

fn location_of(request: &HttpRequest, id: PointOfInterestId) -> String {
    format!("{}/{id}", request.path().trim_end_matches('/'))
}

/// Build the scope serving every point-of-interest route under `path`.
///
/// `path` must contain a `{city_id}` segment.
pub fn points_of_interest_scope(path: &str) -> Scope {
    web::scope(path)
        .service(list_points_of_interest)
        .service(create_point_of_interest)
        .service(get_point_of_interest)
        .service(replace_point_of_interest)
        .service(patch_point_of_interest)
        .service(delete_point_of_interest)
}

/// List the points of interest of a city.
#[utoipa::path(
    get,
    path = "/api/cities/{cityId}/pointsOfInterest",
    params(("cityId" = u32, Path, description = "City identifier")),
    responses(
        (
            status = 200,
            description = "Points of interest in insertion order",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = [PointOfInterestResponse]
        ),
        (status = 404, description = "City not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points-of-interest"],
    operation_id = "listPointsOfInterest"
)]
#[get("")]
pub async fn list_points_of_interest(
    state: web::Data<HttpState>,
    path: web::Path<CityPath>,
) -> ApiResult<HttpResponse> {
    let points = state
        .points_of_interest
        .list_points_of_interest(CityId::new(path.city_id))
        .await?;
    let body: Vec<PointOfInterestResponse> =
        points.into_iter().map(PointOfInterestResponse::from).collect();
    Ok(HttpResponse::Ok().insert_header(no_cache_header()).json(body))
}

/// Fetch one point of interest.
#[utoipa::path(
    get,
    path = "/api/cities/{cityId}/pointsOfInterest/{id}",
    params(
        ("cityId" = u32, Path, description = "City identifier"),
        ("id" = u32, Path, description = "Point-of-interest identifier")
    ),
    responses(
        (
            status = 200,
            description = "Point of interest",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = PointOfInterestResponse
        ),
        (status = 404, description = "City or point of interest not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points-of-interest"],
    operation_id = "getPointOfInterest"
)]
#[get("/{id}")]
pub async fn get_point_of_interest(
    state: web::Data<HttpState>,
    path: web::Path<PointOfInterestPath>,
) -> ApiResult<HttpResponse> {
    let (city_id, id) = path.ids();
    let point = state
        .points_of_interest
        .fetch_point_of_interest(city_id, id)
        .await?;
    Ok(HttpResponse::Ok()
        .insert_header(no_cache_header())
        .json(PointOfInterestResponse::from(point)))
}

/// Create a point of interest.
#[utoipa::path(
    post,
    path = "/api/cities/{cityId}/pointsofinterest",
    params(("cityId" = u32, Path, description = "City identifier")),
    request_body = PointOfInterestRequest,
    responses(
        (
            status = 201,
            description = "Created",
            headers(("Location" = String, description = "URL of the new point of interest")),
            body = PointOfInterestResponse
        ),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "City not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points-of-interest"],
    operation_id = "createPointOfInterest"
)]
#[post("")]
pub async fn create_point_of_interest(
    state: web::Data<HttpState>,
    path: web::Path<CityPath>,
    request: HttpRequest,
    payload: web::Json<PointOfInterestRequest>,
) -> ApiResult<HttpResponse> {
    let created = state
        .points_of_interest_command
        .create(CityId::new(path.city_id), payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location_of(&request, created.id())))
        .json(PointOfInterestResponse::from(created)))
}

/// Replace a point of interest.
#[utoipa::path(
    put,
    path = "/api/cities/{cityId}/pointsofinterest/{id}",
    params(
        ("cityId" = u32, Path, description = "City identifier"),
        ("id" = u32, Path, description = "Point-of-interest identifier")
    ),
    request_body = PointOfInterestRequest,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "City or point of interest not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points-of-interest"],
    operation_id = "replacePointOfInterest"
)]
#[put("/{id}")]
pub async fn replace_point_of_interest(
    state: web::Data<HttpState>,
    path: web::Path<PointOfInterestPath>,
    payload: web::Json<PointOfInterestRequest>,
) -> ApiResult<HttpResponse> {
    let (city_id, id) = path.ids();
    state
        .points_of_interest_command
        .replace(city_id, id, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Partially update a point of interest with a JSON Patch document.
#[utoipa::path(
    patch,
    path = "/api/cities/{cityId}/pointsofinterest/{id}",
    params(
        ("cityId" = u32, Path, description = "City identifier"),
        ("id" = u32, Path, description = "Point-of-interest identifier")
    ),
    request_body(
        content = [PatchOperationSchema],
        content_type = "application/json-patch+json"
    ),
    responses(
        (status = 204, description = "Patched"),
        (status = 400, description = "Invalid patch document or patched state", body = ErrorSchema),
        (status = 404, description = "City or point of interest not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points-of-interest"],
    operation_id = "patchPointOfInterest"
)]
#[patch("/{id}")]
pub async fn patch_point_of_interest(
    state: web::Data<HttpState>,
    path: web::Path<PointOfInterestPath>,
    payload: web::Json<PatchDocument>,
) -> ApiResult<HttpResponse> {
    let (city_id, id) = path.ids();
    state
        .points_of_interest_command
        .patch(city_id, id, payload.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a point of interest and notify the administrator.
#[utoipa::path(
    delete,
    path = "/api/cities/{cityId}/pointsofinterest/{id}",
    params(
        ("cityId" = u32, Path, description = "City identifier"),
        ("id" = u32, Path, description = "Point-of-interest identifier")
    ),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "City or point of interest not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["points-of-interest"],
    operation_id = "deletePointOfInterest"
)]
#[delete("/{id}")]
pub async fn delete_point_of_interest(
    state: web::Data<HttpState>,
    path: web::Path<PointOfInterestPath>,
) -> ApiResult<HttpResponse> {
    let (city_id, id) = path.ids();
    state.points_of_interest_command.delete(city_id, id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "points_of_interest_tests.rs"]
mod tests;

//! City read endpoints.
//!
//! ```text
//! GET /api/cities
//! GET /api/cities/{id}?includePointsOfInterest=false
//! ```

use actix_web::{HttpResponse, get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{City, CityId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::cache_control::no_cache_header;
use crate::inbound::http::points_of_interest::PointOfInterestResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Response payload for a city.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    /// Stable city identifier.
    #[schema(example = 1)]
    pub id: u32,
    /// City name.
    #[schema(example = "New York City")]
    pub name: String,
    /// City description.
    #[schema(example = "The one with that big park.")]
    pub description: String,
    /// Number of points of interest the city owns.
    #[schema(example = 2)]
    pub number_of_points_of_interest: usize,
    /// Points of interest in insertion order; omitted when not requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points_of_interest: Option<Vec<PointOfInterestResponse>>,
}

impl CityResponse {
    fn from_city(city: City, include_points_of_interest: bool) -> Self {
        let id = city.id().get();
        let name = city.name().to_owned();
        let description = city.description().to_owned();
        let points_of_interest = city.into_points_of_interest();
        Self {
            id,
            name,
            description,
            number_of_points_of_interest: points_of_interest.len(),
            points_of_interest: include_points_of_interest.then(|| {
                points_of_interest
                    .into_iter()
                    .map(PointOfInterestResponse::from)
                    .collect()
            }),
        }
    }
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self::from_city(city, true)
    }
}

/// Query parameters accepted by `GET /api/cities/{id}`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CityQuery {
    /// Embed the city's points of interest (default `true`).
    pub include_points_of_interest: Option<bool>,
}

/// List every city.
#[utoipa::path(
    get,
    path = "/api/cities",
    description = "Return every city with its points of interest embedded.",
    responses(
        (
            status = 200,
            description = "Cities in store order",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = [CityResponse]
        ),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "listCities"
)]
#[get("/cities")]
pub async fn list_cities(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let cities = state.cities.list_cities().await?;
    let body: Vec<CityResponse> = cities.into_iter().map(CityResponse::from).collect();
    Ok(HttpResponse::Ok().insert_header(no_cache_header()).json(body))
}

/// Fetch one city.
#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    description = "Return one city. Pass includePointsOfInterest=false to omit the embedded list.",
    params(
        ("id" = u32, Path, description = "City identifier"),
        CityQuery
    ),
    responses(
        (
            status = 200,
            description = "City",
            headers(("Cache-Control" = String, description = "Cache control header")),
            body = CityResponse
        ),
        (status = 404, description = "City not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cities"],
    operation_id = "getCity"
)]
#[get("/cities/{id}")]
pub async fn get_city(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
    query: web::Query<CityQuery>,
) -> ApiResult<HttpResponse> {
    let city = state.cities.fetch_city(CityId::new(path.into_inner())).await?;
    let include = query.include_points_of_interest.unwrap_or(true);
    Ok(HttpResponse::Ok()
        .insert_header(no_cache_header())
        .json(CityResponse::from_city(city, include)))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        MockCitiesQuery, MockPointsOfInterestCommand, MockPointsOfInterestQuery,
    };
    use crate::domain::{Error, PointOfInterest, PointOfInterestDraft, PointOfInterestId};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::{fixture, rstest};
    use serde_json::Value;
    use std::sync::Arc;

    #[fixture]
    fn antwerp() -> City {
        let fields = PointOfInterestDraft::new("Cathedral", "Gothic style cathedral.")
            .validate()
            .expect("valid fields");
        City::new(
            CityId::new(2),
            "Antwerp",
            "The one with the cathedral.",
            vec![PointOfInterest::new(PointOfInterestId::new(3), fields)],
        )
    }

    fn state_with(cities: MockCitiesQuery) -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(cities),
            Arc::new(MockPointsOfInterestQuery::new()),
            Arc::new(MockPointsOfInterestCommand::new()),
        ))
    }

    async fn get_json(state: web::Data<HttpState>, uri: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(state)
                .service(web::scope("/api").service(list_cities).service(get_city)),
        )
        .await;
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        let body: Value = actix_test::read_body_json(response).await;
        (status, body)
    }

    #[rstest]
    fn response_counts_points_of_interest(antwerp: City) {
        let response = CityResponse::from_city(antwerp, false);
        assert_eq!(response.number_of_points_of_interest, 1);
        assert!(response.points_of_interest.is_none());
    }

    #[rstest]
    #[actix_web::test]
    async fn list_returns_every_city(antwerp: City) {
        let mut cities = MockCitiesQuery::new();
        cities
            .expect_list_cities()
            .times(1)
            .return_once(move || Ok(vec![antwerp]));

        let (status, body) = get_json(state_with(cities), "/api/cities").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["name"], "Antwerp");
        assert_eq!(body[0]["numberOfPointsOfInterest"], 1);
        assert_eq!(body[0]["pointsOfInterest"][0]["id"], 3);
    }

    #[rstest]
    #[case("/api/cities/2", true)]
    #[case("/api/cities/2?includePointsOfInterest=true", true)]
    #[case("/api/cities/2?includePointsOfInterest=false", false)]
    #[actix_web::test]
    async fn get_city_honours_include_flag(
        antwerp: City,
        #[case] uri: &str,
        #[case] embedded: bool,
    ) {
        let mut cities = MockCitiesQuery::new();
        cities
            .expect_fetch_city()
            .withf(|id| *id == CityId::new(2))
            .times(1)
            .return_once(move |_| Ok(antwerp));

        let (status, body) = get_json(state_with(cities), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["numberOfPointsOfInterest"], 1);
        assert_eq!(body.get("pointsOfInterest").is_some(), embedded);
    }

    #[rstest]
    #[actix_web::test]
    async fn get_unknown_city_is_not_found() {
        let mut cities = MockCitiesQuery::new();
        cities
            .expect_fetch_city()
            .return_once(|_| Err(Error::not_found("city 9 not found")));

        let (status, body) = get_json(state_with(cities), "/api/cities/9").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }
}

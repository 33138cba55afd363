//! Tests for the in-memory city store.

use super::*;
use rstest::{fixture, rstest};

fn poi(id: u32, name: &str) -> PointOfInterest {
    PointOfInterest::new(
        PointOfInterestId::new(id),
        PointOfInterestFields::new_unchecked(name, format!("About {name}.")),
    )
}

fn fields(name: &str, description: &str) -> PointOfInterestFields {
    PointOfInterestFields::new_unchecked(name, description)
}

/// City 1 owns points {1, 2}; city 2 owns point {3}.
#[fixture]
fn repository() -> InMemoryCityRepository {
    InMemoryCityRepository::new(vec![
        City::new(
            CityId::new(1),
            "New York City",
            "Big park.",
            vec![poi(1, "Central Park"), poi(2, "Empire State Building")],
        ),
        City::new(
            CityId::new(2),
            "Antwerp",
            "Unfinished cathedral.",
            vec![poi(3, "Cathedral of Our Lady")],
        ),
    ])
}

fn ids(city: &City) -> Vec<u32> {
    city.points_of_interest()
        .iter()
        .map(|p| p.id().get())
        .collect()
}

#[rstest]
#[tokio::test]
async fn insert_uses_global_max_id(repository: InMemoryCityRepository) {
    let created = repository
        .insert_point_of_interest(CityId::new(1), fields("Bryant Park", "Midtown park."))
        .await
        .expect("store available")
        .expect("city exists");
    assert_eq!(created.id(), PointOfInterestId::new(4));

    let city = repository
        .find_city(CityId::new(1))
        .await
        .expect("store available")
        .expect("city exists");
    assert_eq!(ids(&city), vec![1, 2, 4]);
}

#[rstest]
#[tokio::test]
async fn consecutive_inserts_stay_unique_across_cities(repository: InMemoryCityRepository) {
    let first = repository
        .insert_point_of_interest(CityId::new(2), fields("Grote Markt", "Main square."))
        .await
        .expect("store available")
        .expect("city exists");
    let second = repository
        .insert_point_of_interest(CityId::new(1), fields("High Line", "Elevated park."))
        .await
        .expect("store available")
        .expect("city exists");
    assert_eq!((first.id().get(), second.id().get()), (4, 5));
}

#[rstest]
#[tokio::test]
async fn insert_into_missing_city_leaves_store_untouched(repository: InMemoryCityRepository) {
    let before = repository.list_cities().await.expect("store available");
    let created = repository
        .insert_point_of_interest(CityId::new(9), fields("Nowhere", "Nothing."))
        .await
        .expect("store available");
    assert!(created.is_none());
    assert_eq!(repository.list_cities().await.expect("store available"), before);
}

#[rstest]
#[tokio::test]
async fn empty_store_starts_ids_at_one() {
    let repository = InMemoryCityRepository::new(vec![City::new(
        CityId::new(1),
        "Ghent",
        "Canals.",
        Vec::new(),
    )]);
    let created = repository
        .insert_point_of_interest(CityId::new(1), fields("Belfry", "Bell tower."))
        .await
        .expect("store available")
        .expect("city exists");
    assert_eq!(created.id(), PointOfInterestId::new(1));
}

#[rstest]
#[tokio::test]
async fn insert_fails_once_ids_are_exhausted() {
    let repository = InMemoryCityRepository::new(vec![City::new(
        CityId::new(1),
        "Ghent",
        "Canals.",
        vec![poi(u32::MAX, "Belfry")],
    )]);

    let err = repository
        .insert_point_of_interest(CityId::new(1), fields("Gravensteen", "Castle."))
        .await
        .expect_err("no id left");

    assert_eq!(err, CityRepositoryError::ids_exhausted());
    let city = repository
        .find_city(CityId::new(1))
        .await
        .expect("store available")
        .expect("city exists");
    assert_eq!(ids(&city), vec![u32::MAX]);
}

#[rstest]
#[tokio::test]
async fn exhausted_ids_still_report_missing_city() {
    let repository = InMemoryCityRepository::new(vec![City::new(
        CityId::new(1),
        "Ghent",
        "Canals.",
        vec![poi(u32::MAX, "Belfry")],
    )]);

    let created = repository
        .insert_point_of_interest(CityId::new(9), fields("Nowhere", "Nothing."))
        .await
        .expect("missing city is not a store failure");

    assert!(created.is_none());
}

#[rstest]
#[tokio::test]
async fn update_overwrites_fields_and_keeps_id(repository: InMemoryCityRepository) {
    let updated = repository
        .update_point_of_interest(
            CityId::new(1),
            PointOfInterestId::new(2),
            fields("Chrysler Building", "Art Deco skyscraper."),
        )
        .await
        .expect("store available")
        .expect("point exists");
    assert_eq!(updated.id(), PointOfInterestId::new(2));
    assert_eq!(updated.name(), "Chrysler Building");
}

#[rstest]
#[case(1, 3)]
#[case(2, 1)]
#[case(9, 1)]
#[tokio::test]
async fn update_requires_point_owned_by_city(
    repository: InMemoryCityRepository,
    #[case] city_id: u32,
    #[case] id: u32,
) {
    let updated = repository
        .update_point_of_interest(
            CityId::new(city_id),
            PointOfInterestId::new(id),
            fields("Other", "Elsewhere."),
        )
        .await
        .expect("store available");
    assert!(updated.is_none());
}

#[rstest]
#[tokio::test]
async fn remove_detaches_point(repository: InMemoryCityRepository) {
    let removed = repository
        .remove_point_of_interest(CityId::new(1), PointOfInterestId::new(1))
        .await
        .expect("store available")
        .expect("point exists");
    assert_eq!(removed.name(), "Central Park");

    let city = repository
        .find_city(CityId::new(1))
        .await
        .expect("store available")
        .expect("city exists");
    assert_eq!(ids(&city), vec![2]);
}

#[rstest]
#[tokio::test]
async fn seeded_store_has_unique_point_ids() {
    let cities = InMemoryCityRepository::seeded()
        .list_cities()
        .await
        .expect("store available");
    let mut all: Vec<u32> = cities.iter().flat_map(ids).collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
    assert_eq!(cities.len(), 3);
}

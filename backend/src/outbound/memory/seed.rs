//! Fixed data the store starts with.

use crate::domain::{City, CityId, PointOfInterest, PointOfInterestFields, PointOfInterestId};

fn point_of_interest(id: u32, name: &str, description: &str) -> PointOfInterest {
    PointOfInterest::new(
        PointOfInterestId::new(id),
        PointOfInterestFields::new_unchecked(name, description),
    )
}

/// Cities loaded at startup. Point-of-interest ids are unique across cities.
pub fn seed_cities() -> Vec<City> {
    vec![
        City::new(
            CityId::new(1),
            "New York City",
            "The one with that big park.",
            vec![
                point_of_interest(
                    1,
                    "Central Park",
                    "The most visited urban park in the United States.",
                ),
                point_of_interest(
                    2,
                    "Empire State Building",
                    "A 102-story skyscraper located in Midtown Manhattan.",
                ),
            ],
        ),
        City::new(
            CityId::new(2),
            "Antwerp",
            "The one with the cathedral that was never really finished.",
            vec![
                point_of_interest(
                    3,
                    "Cathedral of Our Lady",
                    "A Gothic style cathedral, conceived by architects Jan and Pieter Appelmans.",
                ),
                point_of_interest(
                    4,
                    "Antwerp Central Station",
                    "The finest example of railway architecture in Belgium.",
                ),
            ],
        ),
        City::new(
            CityId::new(3),
            "Paris",
            "The one with that big tower.",
            vec![
                point_of_interest(
                    5,
                    "Eiffel Tower",
                    "A wrought iron lattice tower on the Champ de Mars, named after engineer Gustave Eiffel.",
                ),
                point_of_interest(
                    6,
                    "The Louvre",
                    "The world's largest museum.",
                ),
            ],
        ),
    ]
}

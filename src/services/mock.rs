use crate::models::{Coordinate, Place};

/// Default mock coordinate (Taipei 101)
const DEFAULT_LOCATION: Coordinate = Coordinate { lat: 25.0330, lng: 121.5654 };

/// Mock geocoding for development
///
/// Resolves a handful of known landmarks by substring match and falls back
/// to the default coordinate for anything else.
pub fn mock_geocode(address: &str) -> Coordinate {
    let known_locations: [(&str, Coordinate); 4] = [
        ("Taipei 101", Coordinate { lat: 25.0330, lng: 121.5654 }),
        ("Taipei Main Station", Coordinate { lat: 25.0478, lng: 121.5170 }),
        ("Ximending", Coordinate { lat: 25.0424, lng: 121.5067 }),
        ("Xinyi District", Coordinate { lat: 25.0330, lng: 121.5654 }),
    ];

    for (landmark, location) in known_locations {
        if address.contains(landmark) {
            return location;
        }
    }

    DEFAULT_LOCATION
}

/// Mock nearby places search for development
///
/// Returns a fixed candidate list around the Xinyi district, filtered to
/// the requested radius. Distances are pre-annotated; the bogus `score`
/// values are deliberate and must be overwritten by the ranking engine.
pub fn mock_nearby_places(_center: Coordinate, radius: f64) -> Vec<Place> {
    let mock_places = vec![
        mock_place(
            "mock-1",
            "Din Tai Fung",
            "No. 45, Shifu Rd, Xinyi District, Taipei",
            Coordinate { lat: 25.0336, lng: 121.5650 },
            Some(4.5),
            Some(15234),
            Some(2),
            &["restaurant", "food"],
            Some(true),
            120.0,
            0.92,
        ),
        mock_place(
            "mock-2",
            "Tim Ho Wan",
            "No. 97, Songren Rd, Xinyi District, Taipei",
            Coordinate { lat: 25.0325, lng: 121.5665 },
            Some(4.3),
            Some(8567),
            Some(1),
            &["restaurant", "food"],
            Some(true),
            180.0,
            0.88,
        ),
        mock_place(
            "mock-3",
            "Eslite Xinyi Food Court",
            "No. 11, Songgao Rd, Xinyi District, Taipei",
            Coordinate { lat: 25.0360, lng: 121.5687 },
            Some(4.1),
            Some(5423),
            Some(2),
            &["restaurant", "food", "meal_takeaway"],
            Some(true),
            250.0,
            0.85,
        ),
        mock_place(
            "mock-4",
            "Eatogether",
            "No. 28, Songren Rd, Xinyi District, Taipei",
            Coordinate { lat: 25.0310, lng: 121.5645 },
            Some(4.2),
            Some(12456),
            Some(3),
            &["restaurant", "food"],
            Some(true),
            300.0,
            0.83,
        ),
        mock_place(
            "mock-5",
            "Thai Town Cuisine",
            "No. 12, Songshou Rd, Xinyi District, Taipei",
            Coordinate { lat: 25.0355, lng: 121.5670 },
            Some(4.4),
            Some(9876),
            Some(2),
            &["restaurant", "food"],
            Some(false),
            350.0,
            0.81,
        ),
        mock_place(
            "mock-6",
            "Shin Yeh Taiwanese Cuisine",
            "No. 19, Songgao Rd, Xinyi District, Taipei",
            Coordinate { lat: 25.0365, lng: 121.5695 },
            Some(4.6),
            Some(11234),
            Some(3),
            &["restaurant", "food"],
            Some(true),
            420.0,
            0.79,
        ),
    ];

    mock_places
        .into_iter()
        .filter(|place| place.distance_meters.unwrap_or(0.0) <= radius)
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn mock_place(
    id: &str,
    name: &str,
    address: &str,
    location: Coordinate,
    rating: Option<f64>,
    rating_count: Option<u32>,
    price_tier: Option<u8>,
    categories: &[&str],
    is_open_now: Option<bool>,
    distance_meters: f64,
    score: f64,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        location,
        rating,
        rating_count,
        price_tier,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        photo_url: None,
        is_open_now,
        distance_meters: Some(distance_meters),
        score: Some(score),
    }
}

use crate::models::Coordinate;

/// Earth's radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine great-circle distance between two coordinates
///
/// # Arguments
/// * `from` - First coordinate in degrees
/// * `to` - Second coordinate in degrees
///
/// # Returns
/// Distance in meters, rounded to the nearest integer
#[inline]
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_M * c).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_same_point_is_zero() {
        let taipei = Coordinate { lat: 25.0330, lng: 121.5654 };
        assert_eq!(distance_meters(taipei, taipei), 0.0);
    }

    #[test]
    fn test_distance_london_to_paris() {
        // London to Paris is approximately 344 km
        let london = Coordinate { lat: 51.5074, lng: -0.1278 };
        let paris = Coordinate { lat: 48.8566, lng: 2.3522 };

        let distance = distance_meters(london, paris);
        assert!(
            (distance - 344_000.0).abs() < 10_000.0,
            "Distance should be ~344km, got {}m",
            distance
        );
    }

    #[test]
    fn test_distance_within_a_city_block() {
        // Two points ~500m apart in the Xinyi district
        let a = Coordinate { lat: 25.0330, lng: 121.5654 };
        let b = Coordinate { lat: 25.0375, lng: 121.5654 };

        let distance = distance_meters(a, b);
        assert!(distance > 400.0 && distance < 600.0, "got {}m", distance);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate { lat: 25.0330, lng: 121.5654 };
        let b = Coordinate { lat: 25.0478, lng: 121.5170 };

        assert_eq!(distance_meters(a, b), distance_meters(b, a));
    }

    #[test]
    fn test_distance_is_rounded_to_whole_meters() {
        let a = Coordinate { lat: 25.0330, lng: 121.5654 };
        let b = Coordinate { lat: 25.0336, lng: 121.5650 };

        let distance = distance_meters(a, b);
        assert_eq!(distance, distance.round());
    }
}

/// Weight of the normalized rating in the blended score
const RATING_WEIGHT: f64 = 0.6;

/// Weight of the normalized proximity in the blended score
const PROXIMITY_WEIGHT: f64 = 0.4;

/// Calculate the blended score (0-1) for a place
///
/// Scoring formula:
/// ```text
/// normalized_rating    = rating / 5.0      (0 when absent)
/// normalized_proximity = 1 - min(distance / max_distance, 1)
/// score = 0.6 * normalized_rating + 0.4 * normalized_proximity
/// ```
///
/// A place without a rating is never excluded here, only penalized with a
/// zero rating contribution. Distance beyond `max_distance_meters` is
/// clamped, so the proximity contribution never goes negative. The caller
/// guarantees `max_distance_meters > 0`.
///
/// # Arguments
/// * `rating` - Upstream rating (0-5) if the place has one
/// * `distance_meters` - Distance from the search center in meters
/// * `max_distance_meters` - The search radius in meters
///
/// # Returns
/// Blended score in [0, 1]
#[inline]
pub fn calculate_score(
    rating: Option<f64>,
    distance_meters: f64,
    max_distance_meters: f64,
) -> f64 {
    let normalized_rating = rating.map_or(0.0, |r| r / 5.0);

    let normalized_proximity = 1.0 - (distance_meters / max_distance_meters).min(1.0);

    RATING_WEIGHT * normalized_rating + PROXIMITY_WEIGHT * normalized_proximity
}

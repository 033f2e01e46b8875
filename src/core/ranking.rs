use std::cmp::Ordering;

use crate::core::scoring::calculate_score;
use crate::models::Place;

/// Score and rank a candidate list
///
/// Every place gets its blended score computed and stored, overwriting any
/// score already present. Places are then sorted by score, highest first,
/// with a stable sort so equal scores keep their original relative order.
///
/// # Arguments
/// * `places` - Candidates already annotated with `distance_meters`
/// * `max_distance_meters` - The search radius the distances relate to
/// * `limit` - Optional cap on the number of returned places
///
/// # Returns
/// Ranked places, truncated to `limit` when one is given
pub fn rank_places(
    places: Vec<Place>,
    max_distance_meters: f64,
    limit: Option<usize>,
) -> Vec<Place> {
    let mut ranked: Vec<Place> = places
        .into_iter()
        .map(|mut place| {
            place.score = Some(calculate_score(
                place.rating,
                place.distance_meters.unwrap_or(0.0),
                max_distance_meters,
            ));
            place
        })
        .collect();

    // Vec::sort_by is stable, so tied scores preserve input order
    ranked.sort_by(|a, b| {
        let a_score = a.score.unwrap_or(0.0);
        let b_score = b.score.unwrap_or(0.0);
        b_score.partial_cmp(&a_score).unwrap_or(Ordering::Equal)
    });

    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;

    fn create_place(id: &str, rating: Option<f64>, distance_meters: f64) -> Place {
        Place {
            id: id.to_string(),
            name: format!("Place {}", id),
            address: String::new(),
            location: Coordinate { lat: 25.0330, lng: 121.5654 },
            rating,
            rating_count: rating.map(|_| 50),
            price_tier: Some(2),
            categories: vec!["restaurant".to_string()],
            photo_url: None,
            is_open_now: Some(true),
            distance_meters: Some(distance_meters),
            score: None,
        }
    }

    #[test]
    fn test_ranking_sorts_by_score_descending() {
        let places = vec![
            create_place("far", Some(4.0), 800.0),
            create_place("close", Some(4.0), 100.0),
            create_place("mid", Some(4.0), 400.0),
        ];

        let ranked = rank_places(places, 1000.0, None);

        let ids: Vec<_> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["close", "mid", "far"]);

        for pair in ranked.windows(2) {
            assert!(pair[0].score.unwrap() >= pair[1].score.unwrap());
        }
    }

    #[test]
    fn test_ranking_populates_every_score() {
        let places = vec![
            create_place("1", Some(4.5), 200.0),
            create_place("2", None, 300.0),
        ];

        let ranked = rank_places(places, 1000.0, None);

        assert!(ranked.iter().all(|p| p.score.is_some()));
    }

    #[test]
    fn test_ranking_overwrites_upstream_score() {
        let mut place = create_place("1", Some(4.5), 500.0);
        place.score = Some(0.01);

        let ranked = rank_places(vec![place], 1000.0, None);

        // 0.6 * 0.9 + 0.4 * 0.5 = 0.74, not the bogus upstream value
        assert!((ranked[0].score.unwrap() - 0.74).abs() < 1e-9);
    }

    #[test]
    fn test_tied_scores_keep_input_order() {
        // Identical rating and distance give identical scores
        let places = vec![
            create_place("a", Some(4.0), 300.0),
            create_place("b", Some(4.0), 300.0),
            create_place("c", Some(4.0), 300.0),
        ];

        let ranked = rank_places(places, 1000.0, None);

        let ids: Vec<_> = ranked.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_limit_truncates_results() {
        let places = vec![
            create_place("1", Some(4.5), 100.0),
            create_place("2", Some(4.0), 200.0),
            create_place("3", Some(3.5), 300.0),
        ];

        let ranked = rank_places(places, 1000.0, Some(2));
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_limit_beyond_input_returns_all() {
        let places = vec![create_place("1", Some(4.5), 100.0)];

        let ranked = rank_places(places, 1000.0, Some(10));
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let ranked = rank_places(vec![], 1000.0, None);
        assert!(ranked.is_empty());

        let ranked = rank_places(vec![], 1000.0, Some(5));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_missing_distance_treated_as_zero() {
        let mut place = create_place("1", Some(4.0), 0.0);
        place.distance_meters = None;

        let ranked = rank_places(vec![place], 1000.0, None);

        // 0.6 * 0.8 + 0.4 * 1.0 = 0.88
        assert!((ranked[0].score.unwrap() - 0.88).abs() < 1e-9);
    }
}

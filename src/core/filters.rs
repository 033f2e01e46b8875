use crate::models::{FilterSpec, Place};

/// Check a place against the price predicate
///
/// A place without a price tier is always kept: missing price data means
/// "unknown", not "outside the selected tiers".
#[inline]
pub fn matches_price(place: &Place, filters: &FilterSpec) -> bool {
    match place.price_tier {
        Some(tier) => filters.price_tiers.contains(&tier),
        None => true,
    }
}

/// Check a place against the category predicate
///
/// A place is kept when at least one of its category tags is among the
/// selected categories.
#[inline]
pub fn matches_category(place: &Place, filters: &FilterSpec) -> bool {
    place.categories.iter().any(|tag| {
        filters
            .categories
            .iter()
            .any(|category| category.as_tag() == tag)
    })
}

/// Check a place against the minimum-rating predicate
///
/// A place without a rating is always excluded: missing rating data cannot
/// satisfy a minimum-rating requirement. Note the opposite absence policy
/// from the price predicate.
#[inline]
pub fn matches_rating(place: &Place, min_rating: f64) -> bool {
    match place.rating {
        Some(rating) => rating >= min_rating,
        None => false,
    }
}

/// Apply all active filter predicates to a candidate list
///
/// Predicates are applied in a fixed order (price, category, rating) and
/// ANDed together. The relative order of surviving places is preserved.
/// With no active predicate the input comes back unchanged.
pub fn filter_places(places: Vec<Place>, filters: &FilterSpec) -> Vec<Place> {
    let mut filtered = places;

    if filters.price_active() {
        filtered.retain(|place| matches_price(place, filters));
    }

    if filters.category_active() {
        filtered.retain(|place| matches_category(place, filters));
    }

    if filters.rating_active() {
        let min_rating = filters.min_rating.unwrap_or(0.0);
        filtered.retain(|place| matches_rating(place, min_rating));
    }

    filtered
}

use serde::{Deserialize, Serialize};

/// Geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Searchable establishment category
///
/// Mirrors the category tags used by the Places Nearby API. `All` is a
/// sentinel: as a search type it fans out to every concrete category, and
/// inside a filter it deactivates the category predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategory {
    Restaurant,
    Cafe,
    Bakery,
    MealTakeaway,
    Bar,
    All,
}

impl PlaceCategory {
    /// Every concrete category, in the order searches fan out
    pub const CONCRETE: [PlaceCategory; 5] = [
        PlaceCategory::Restaurant,
        PlaceCategory::Cafe,
        PlaceCategory::Bakery,
        PlaceCategory::MealTakeaway,
        PlaceCategory::Bar,
    ];

    /// The wire tag as it appears in a place's `types` list
    pub fn as_tag(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Cafe => "cafe",
            PlaceCategory::Bakery => "bakery",
            PlaceCategory::MealTakeaway => "meal_takeaway",
            PlaceCategory::Bar => "bar",
            PlaceCategory::All => "all",
        }
    }

    /// Display label used by the filter summary
    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::Restaurant => "Restaurant",
            PlaceCategory::Cafe => "Cafe",
            PlaceCategory::Bakery => "Bakery",
            PlaceCategory::MealTakeaway => "Takeaway",
            PlaceCategory::Bar => "Bar",
            PlaceCategory::All => "All",
        }
    }
}

/// One candidate establishment
///
/// Constructed once per search from upstream data. Every field except
/// `score` is treated as immutable; `score` is derived and set by the
/// ranking engine, overwriting anything upstream supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub location: Coordinate,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(rename = "userRatingsTotal", default)]
    pub rating_count: Option<u32>,
    #[serde(rename = "priceLevel", default)]
    pub price_tier: Option<u8>,
    #[serde(rename = "types", default)]
    pub categories: Vec<String>,
    #[serde(rename = "photoUrl", default)]
    pub photo_url: Option<String>,
    #[serde(rename = "isOpen", default)]
    pub is_open_now: Option<bool>,
    #[serde(rename = "distance", default)]
    pub distance_meters: Option<f64>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// Optional filter predicates applied before ranking
///
/// Empty collections and absent values mean "no constraint". The three
/// predicates are independent and ANDed together when active.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(rename = "priceLevel", default)]
    pub price_tiers: Vec<u8>,
    #[serde(rename = "types", default)]
    pub categories: Vec<PlaceCategory>,
    #[serde(rename = "minRating", default)]
    pub min_rating: Option<f64>,
}

impl FilterSpec {
    /// Price predicate is active iff any tier is selected
    pub fn price_active(&self) -> bool {
        !self.price_tiers.is_empty()
    }

    /// Category predicate is active iff categories are selected and the
    /// `all` sentinel is not among them
    pub fn category_active(&self) -> bool {
        !self.categories.is_empty() && !self.categories.contains(&PlaceCategory::All)
    }

    /// Rating predicate is active iff a positive minimum is set
    pub fn rating_active(&self) -> bool {
        self.min_rating.unwrap_or(0.0) > 0.0
    }

    /// True when no predicate is active
    pub fn is_empty(&self) -> bool {
        !self.price_active() && !self.category_active() && !self.rating_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_spec_is_inactive() {
        let filters = FilterSpec::default();
        assert!(!filters.price_active());
        assert!(!filters.category_active());
        assert!(!filters.rating_active());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_all_sentinel_deactivates_category_filter() {
        let filters = FilterSpec {
            categories: vec![PlaceCategory::Cafe, PlaceCategory::All],
            ..FilterSpec::default()
        };
        assert!(!filters.category_active());
    }

    #[test]
    fn test_zero_min_rating_is_inactive() {
        let filters = FilterSpec {
            min_rating: Some(0.0),
            ..FilterSpec::default()
        };
        assert!(!filters.rating_active());
        assert!(filters.is_empty());
    }

    #[test]
    fn test_category_wire_tags() {
        assert_eq!(PlaceCategory::MealTakeaway.as_tag(), "meal_takeaway");
        assert_eq!(PlaceCategory::Cafe.as_tag(), "cafe");

        let json = serde_json::to_string(&PlaceCategory::MealTakeaway).unwrap();
        assert_eq!(json, "\"meal_takeaway\"");
    }
}

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{FilterSpec, PlaceCategory};

/// Request to search for food places around an address
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub address: String,
    /// Search radius in meters; falls back to the configured default
    #[validate(range(min = 1.0, max = 50000.0))]
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default = "default_category", rename = "type", alias = "category")]
    pub category: PlaceCategory,
    #[serde(default)]
    pub filters: FilterSpec,
}

fn default_category() -> PlaceCategory {
    PlaceCategory::Restaurant
}

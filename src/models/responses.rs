use serde::{Deserialize, Serialize};

use crate::models::domain::{Coordinate, Place};

/// Response for the search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub location: Coordinate,
    #[serde(rename = "filtersApplied")]
    pub filters_applied: String,
    pub places: Vec<Place>,
    pub top5: Vec<Place>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub cache: String,
    #[serde(rename = "googlePlaces")]
    pub google_places: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

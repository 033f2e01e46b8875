use std::collections::HashSet;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::core::distance::distance_meters;
use crate::models::{Coordinate, Place, PlaceCategory};
use crate::services::mock::{mock_geocode, mock_nearby_places};

const GEOCODING_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
const PLACES_NEARBY_API_URL: &str =
    "https://maps.googleapis.com/maps/api/place/nearbysearch/json";
const PLACE_PHOTO_API_URL: &str = "https://maps.googleapis.com/maps/api/place/photo";

/// Errors that can occur when talking to the Google Maps APIs
#[derive(Debug, Error)]
pub enum GoogleError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned status {0}: {1}")]
    ApiError(String, String),

    #[error("No results for: {0}")]
    NoResults(String),
}

/// Google Maps API client
///
/// Handles geocoding and nearby-place lookup. Every public lookup degrades
/// to the bundled mock dataset when mock mode is on, when no API key is
/// configured, or when the upstream call fails, so the search pipeline
/// always receives a candidate list.
pub struct GooglePlacesClient {
    api_key: String,
    language: String,
    use_mock: bool,
    geocoding_url: String,
    nearby_url: String,
    client: Client,
}

impl GooglePlacesClient {
    /// Create a new client against the production Google endpoints
    pub fn new(api_key: String, language: String, use_mock: bool) -> Self {
        Self::with_base_urls(
            api_key,
            language,
            use_mock,
            GEOCODING_API_URL.to_string(),
            PLACES_NEARBY_API_URL.to_string(),
        )
    }

    /// Create a client against custom endpoints (used by tests)
    pub fn with_base_urls(
        api_key: String,
        language: String,
        use_mock: bool,
        geocoding_url: String,
        nearby_url: String,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            api_key,
            language,
            use_mock,
            geocoding_url,
            nearby_url,
            client,
        }
    }

    /// Whether a real API key is configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn mock_only(&self) -> bool {
        self.use_mock || !self.has_api_key()
    }

    /// Resolve a free-text address to a coordinate
    pub async fn geocode(&self, address: &str) -> Coordinate {
        if self.mock_only() {
            tracing::warn!("Using mock geocoding data for: {}", address);
            return mock_geocode(address);
        }

        match self.geocode_remote(address).await {
            Ok(location) => location,
            Err(e) => {
                tracing::warn!("Geocoding failed ({}), falling back to mock data", e);
                mock_geocode(address)
            }
        }
    }

    /// Search for food places around a coordinate
    ///
    /// `All` fans out to one request per concrete category; results are
    /// de-duplicated by place id, keeping first occurrence. Every returned
    /// place is annotated with its rounded distance from `center`.
    pub async fn nearby_places(
        &self,
        center: Coordinate,
        radius: f64,
        category: PlaceCategory,
    ) -> Vec<Place> {
        if self.mock_only() {
            tracing::warn!(
                "Using mock nearby places data for location: {},{}",
                center.lat,
                center.lng
            );
            return mock_nearby_places(center, radius);
        }

        match self.nearby_remote(center, radius, category).await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!("Nearby search failed ({}), falling back to mock data", e);
                mock_nearby_places(center, radius)
            }
        }
    }

    async fn geocode_remote(&self, address: &str) -> Result<Coordinate, GoogleError> {
        let url = format!(
            "{}?address={}&key={}&language={}",
            self.geocoding_url,
            urlencoding::encode(address),
            self.api_key,
            self.language
        );

        tracing::debug!("Geocoding address: {}", address);

        let response: GeocodeResponse = self.client.get(&url).send().await?.json().await?;

        if response.status != "OK" {
            return Err(GoogleError::ApiError(
                response.status,
                response.error_message.unwrap_or_default(),
            ));
        }

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or_else(|| GoogleError::NoResults(address.to_string()))?;

        Ok(first.geometry.location)
    }

    async fn nearby_remote(
        &self,
        center: Coordinate,
        radius: f64,
        category: PlaceCategory,
    ) -> Result<Vec<Place>, GoogleError> {
        let categories: &[PlaceCategory] = if category == PlaceCategory::All {
            &PlaceCategory::CONCRETE
        } else {
            std::slice::from_ref(&category)
        };

        let mut seen_ids: HashSet<String> = HashSet::new();
        let mut places: Vec<Place> = Vec::new();

        for place_type in categories {
            let url = format!(
                "{}?location={},{}&radius={}&type={}&key={}&language={}",
                self.nearby_url,
                center.lat,
                center.lng,
                radius,
                place_type.as_tag(),
                self.api_key,
                self.language
            );

            let response: NearbyResponse = self.client.get(&url).send().await?.json().await?;

            // ZERO_RESULTS for one category is not an error for the fan-out
            if response.status != "OK" && response.status != "ZERO_RESULTS" {
                return Err(GoogleError::ApiError(
                    response.status,
                    response.error_message.unwrap_or_default(),
                ));
            }

            for result in response.results {
                if seen_ids.insert(result.place_id.clone()) {
                    places.push(self.map_place(result, center));
                }
            }
        }

        tracing::debug!("Nearby search returned {} unique places", places.len());

        Ok(places)
    }

    /// Convert a raw nearby-search result into a distance-annotated Place
    fn map_place(&self, result: NearbyResult, center: Coordinate) -> Place {
        let location = result.geometry.location;
        let distance = distance_meters(center, location);

        let photo_url = result
            .photos
            .as_ref()
            .and_then(|photos| photos.first())
            .map(|photo| self.photo_url(&photo.photo_reference, 400));

        Place {
            id: result.place_id.clone(),
            name: result.name,
            address: result
                .vicinity
                .or(result.formatted_address)
                .unwrap_or_default(),
            location,
            rating: result.rating,
            rating_count: result.user_ratings_total,
            price_tier: result.price_level,
            categories: result.types.unwrap_or_default(),
            photo_url,
            is_open_now: result.opening_hours.and_then(|hours| hours.open_now),
            distance_meters: Some(distance),
            score: None,
        }
    }

    /// Build a photo URL for a photo reference
    pub fn photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        format!(
            "{}?maxwidth={}&photo_reference={}&key={}",
            PLACE_PHOTO_API_URL,
            max_width,
            urlencoding::encode(photo_reference),
            self.api_key
        )
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: String,
    name: String,
    geometry: Geometry,
    vicinity: Option<String>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u32>,
    price_level: Option<u8>,
    types: Option<Vec<String>>,
    opening_hours: Option<OpeningHours>,
    photos: Option<Vec<Photo>>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    open_now: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

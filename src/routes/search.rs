use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::SearchSettings;
use crate::core::{filter_places, rank_places, summarize_filters};
use crate::models::{Coordinate, ErrorResponse, HealthResponse, Place, SearchRequest, SearchResponse};
use crate::services::{CacheKey, CacheManager, GooglePlacesClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub google: Arc<GooglePlacesClient>,
    pub cache: Option<Arc<CacheManager>>,
    pub search: SearchSettings,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/search", web::post().to(search));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let cache_status = match &state.cache {
        Some(cache) => match cache.ping().await {
            Ok(()) => "connected",
            Err(_) => "unreachable",
        },
        None => "disabled",
    };

    let status = if cache_status == "unreachable" {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        cache: cache_status.to_string(),
        google_places: state.google.has_api_key(),
    })
}

/// Search endpoint
///
/// POST /api/v1/search
///
/// Request body:
/// ```json
/// {
///   "address": "string",
///   "radius": 1000,
///   "type": "restaurant|cafe|bakery|meal_takeaway|bar|all",
///   "filters": {"priceLevel": [1, 2], "types": ["cafe"], "minRating": 4.0}
/// }
/// ```
async fn search(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let radius = req.radius.unwrap_or(state.search.default_radius_m);

    tracing::info!(
        "Searching places near '{}' within {}m (type: {:?})",
        req.address,
        radius,
        req.category
    );

    // 1. Resolve the address to a coordinate
    let location = resolve_location(&state, &req.address).await;

    // 2. Fetch distance-annotated candidates around it
    let candidates = resolve_candidates(&state, location, radius, &req).await;

    tracing::debug!("Found {} candidates near '{}'", candidates.len(), req.address);

    // 3. Filter, then score and rank
    let filtered = filter_places(candidates, &req.filters);
    let ranked = rank_places(filtered, radius, None);

    // 4. Take the presentation slice
    let top5: Vec<Place> = ranked.iter().take(state.search.top_n).cloned().collect();

    tracing::info!(
        "Returning {} ranked places ({} in top slice) for '{}'",
        ranked.len(),
        top5.len(),
        req.address
    );

    HttpResponse::Ok().json(SearchResponse {
        location,
        filters_applied: summarize_filters(&req.filters),
        places: ranked,
        top5,
    })
}

/// Geocode an address, consulting the cache when one is configured
async fn resolve_location(state: &AppState, address: &str) -> Coordinate {
    let key = CacheKey::geocode(address);

    if let Some(cache) = &state.cache {
        if let Ok(location) = cache.get::<Coordinate>(&key).await {
            return location;
        }

        let location = state.google.geocode(address).await;
        if let Err(e) = cache.set(&key, &location).await {
            tracing::warn!("Failed to cache geocode result: {}", e);
        }
        return location;
    }

    state.google.geocode(address).await
}

/// Look up nearby candidates, consulting the cache when one is configured
async fn resolve_candidates(
    state: &AppState,
    location: Coordinate,
    radius: f64,
    req: &SearchRequest,
) -> Vec<Place> {
    let key = CacheKey::nearby(location.lat, location.lng, radius, req.category.as_tag());

    if let Some(cache) = &state.cache {
        if let Ok(places) = cache.get::<Vec<Place>>(&key).await {
            return places;
        }

        let places = state
            .google
            .nearby_places(location, radius, req.category)
            .await;
        if let Err(e) = cache.set(&key, &places).await {
            tracing::warn!("Failed to cache nearby results: {}", e);
        }
        return places;
    }

    state.google.nearby_places(location, radius, req.category).await
}

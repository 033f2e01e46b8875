// Service exports
pub mod cache;
pub mod google;
pub mod mock;

pub use cache::{CacheError, CacheKey, CacheManager};
pub use google::{GoogleError, GooglePlacesClient};
pub use mock::{mock_geocode, mock_nearby_places};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub google: GoogleSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSettings {
    /// API key for the Geocoding and Places APIs; empty means mock mode
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub use_mock_data: bool,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            use_mock_data: false,
        }
    }
}

fn default_language() -> String { "en".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    /// Absent means the service runs without a cache
    #[serde(default)]
    pub redis_url: Option<String>,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_radius_m")]
    pub default_radius_m: f64,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_m: default_radius_m(),
            top_n: default_top_n(),
        }
    }
}

fn default_radius_m() -> f64 { 1000.0 }
fn default_top_n() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with NEARBITE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with NEARBITE_)
            // e.g., NEARBITE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NEARBITE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Honor the bare env vars the deployment already uses
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NEARBITE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply bare (un-prefixed) environment variable overrides
///
/// `GOOGLE_PLACES_API_KEY`, `USE_MOCK_DATA`, and `REDIS_URL` are the names
/// the surrounding deployment exports, so they win over file values.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("GOOGLE_PLACES_API_KEY")
        .or_else(|_| env::var("NEARBITE_GOOGLE__API_KEY"))
        .ok();
    let use_mock_data = env::var("USE_MOCK_DATA").ok();
    let redis_url = env::var("REDIS_URL").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("google.api_key", api_key)?;
    }
    if let Some(use_mock_data) = use_mock_data {
        builder = builder.set_override("google.use_mock_data", use_mock_data == "true")?;
    }
    if let Some(redis_url) = redis_url {
        builder = builder.set_override("cache.redis_url", redis_url)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.default_radius_m, 1000.0);
        assert_eq!(search.top_n, 5);
    }

    #[test]
    fn test_default_google_settings_run_mock() {
        let google = GoogleSettings::default();
        assert!(google.api_key.is_empty());
        assert!(!google.use_mock_data);
        assert_eq!(google.language, "en");
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_cache_is_disabled() {
        let cache = CacheSettings::default();
        assert!(cache.redis_url.is_none());
    }
}

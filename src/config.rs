use config::{Case, Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::weather::models::{TemperatureUnit, WindSpeedUnit};

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherConfig {
    /// Whether responses are cached at all
    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    /// Cache TTL in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,

    /// Preferred temperature unit for display formatting
    #[serde(default)]
    pub temperature_unit: TemperatureUnit,

    /// Preferred wind speed unit for display formatting
    #[serde(default)]
    pub wind_speed_unit: WindSpeedUnit,

    /// Forecast endpoint base URL
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,

    /// Air quality endpoint base URL
    #[serde(default = "default_air_quality_url")]
    pub air_quality_url: String,

    /// Geocoding endpoint base URL
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            cache_ttl_secs: default_cache_ttl_secs(),
            temperature_unit: TemperatureUnit::default(),
            wind_speed_unit: WindSpeedUnit::default(),
            forecast_url: default_forecast_url(),
            air_quality_url: default_air_quality_url(),
            geocoding_url: default_geocoding_url(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cache_ttl_secs() -> u64 {
    300 // 5 minutes
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_air_quality_url() -> String {
    "https://air-quality-api.open-meteo.com/v1/air-quality".to_string()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".to_string()
}

impl WeatherConfig {
    /// Load configuration from file and environment.
    ///
    /// Layering: built-in defaults, then an optional `meteocore` config file
    /// (and `meteocore.local` override), then environment variables prefixed
    /// with `METEOCORE_`.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            .add_source(File::with_name("meteocore").required(false))
            .add_source(File::with_name("meteocore.local").required(false))
            // Convert SCREAMING_SNAKE_CASE env vars to snake_case config keys
            .add_source(
                Environment::with_prefix("METEOCORE")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WeatherConfig::default();
        assert!(config.cache_enabled);
        assert_eq!(config.cache_ttl_secs, 300);
        assert_eq!(config.temperature_unit, TemperatureUnit::Celsius);
        assert!(config.forecast_url.contains("api.open-meteo.com"));
    }

    #[test]
    fn test_deserialize_partial_fills_defaults() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"cache_ttl_secs": 60}"#).expect("valid config");
        assert_eq!(config.cache_ttl_secs, 60);
        assert!(config.cache_enabled);
        assert_eq!(config.geocoding_url, default_geocoding_url());
    }
}

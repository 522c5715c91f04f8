use std::time::Duration;

use reqwest::Client;

use super::api::{AirQualityResponse, ForecastResponse, GeocodingResponse};
use super::models::{Location, WeatherData};
use super::normalize;
use crate::cache::{CacheStats, TtlCache};
use crate::config::WeatherConfig;
use crate::error::{Endpoint, WeatherError};

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Cache keys round coordinates to 4 decimal places (~11 m). Points that
/// differ only beyond that resolve to the same entry; this is the intended
/// caching granularity, not a defect.
const COORD_KEY_DECIMALS: usize = 4;

const FORECAST_CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
    is_day,precipitation,rain,showers,snowfall,weather_code,cloud_cover,pressure_msl,\
    surface_pressure,wind_speed_10m,wind_direction_10m,wind_gusts_10m,dew_point_2m,visibility,\
    uv_index";

const FORECAST_HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
    precipitation_probability,precipitation,rain,snowfall,weather_code,surface_pressure,\
    wind_speed_10m,wind_direction_10m,dew_point_2m,is_day";

const FORECAST_DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,sunrise,sunset,\
    precipitation_probability_max,precipitation_sum,weather_code,uv_index_max,\
    wind_speed_10m_max,wind_direction_10m_dominant";

const AIR_QUALITY_FIELDS: &str = "us_aqi,pm2_5,pm10,ozone,nitrogen_dioxide";

/// Orchestrating weather client: fetches from Open-Meteo, consults and
/// populates the caches, and runs normalization. The only component that
/// performs network I/O.
///
/// Callers construct and own their instance; there is no shared default.
pub struct WeatherService {
    client: Client,
    config: WeatherConfig,
    weather_cache: TtlCache<WeatherData>,
    geo_cache: TtlCache<Vec<Location>>,
}

impl WeatherService {
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        let ttl = Duration::from_secs(config.cache_ttl_secs);
        Ok(Self {
            client,
            weather_cache: TtlCache::new(ttl),
            geo_cache: TtlCache::new(ttl),
            config,
        })
    }

    /// Complete weather data for coordinates.
    ///
    /// On a cache miss the forecast and air-quality feeds are fetched
    /// concurrently. Air quality is best-effort enrichment: its failure
    /// yields `air_quality: None` rather than failing the call. A forecast
    /// failure propagates and caches nothing.
    pub async fn get_weather(&self, lat: f64, lon: f64) -> Result<WeatherData, WeatherError> {
        let cache_key = format!(
            "weather:{lat:.prec$}:{lon:.prec$}",
            prec = COORD_KEY_DECIMALS
        );

        if self.config.cache_enabled {
            if let Some(cached) = self.weather_cache.get(&cache_key) {
                tracing::debug!(key = %cache_key, "Weather cache hit");
                return Ok(cached);
            }
        }

        tracing::debug!(lat = %lat, lon = %lon, "Fetching weather data");

        let (forecast, air_quality) = tokio::join!(
            self.fetch_forecast(lat, lon),
            self.fetch_air_quality(lat, lon)
        );

        let forecast = forecast?;
        let air_quality = match air_quality {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::debug!(error = %e, "Air quality unavailable, continuing without it");
                None
            }
        };

        let data = normalize::normalize(forecast, air_quality)?;

        if self.config.cache_enabled {
            self.weather_cache.set(cache_key, data.clone(), None);
        }

        tracing::info!(
            lat = %lat,
            lon = %lon,
            temp = %data.current.temperature,
            "Weather data fetched"
        );

        Ok(data)
    }

    /// Search for locations by name. An empty result list is a valid,
    /// non-error outcome.
    pub async fn search_location(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<Location>, WeatherError> {
        let cache_key = format!("geo:{}", query.to_lowercase());

        if self.config.cache_enabled {
            if let Some(cached) = self.geo_cache.get(&cache_key) {
                tracing::debug!(query = %query, "Geocoding cache hit");
                return Ok(cached);
            }
        }

        tracing::debug!(query = %query, limit = %limit, "Searching locations");

        let response = self
            .client
            .get(&self.config.geocoding_url)
            .query(&[
                ("name", query),
                ("count", &limit.to_string()),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::upstream(Endpoint::Geocoding, status));
        }

        let data: GeocodingResponse = response.json().await?;
        let locations: Vec<Location> = data
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();

        if self.config.cache_enabled {
            self.geo_cache.set(cache_key, locations.clone(), None);
        }

        Ok(locations)
    }

    /// Weather for a location by name: geocode first, then fetch by the
    /// resolved coordinates. The returned data carries the geocoded
    /// identity instead of the forecast feed's coordinate placeholder.
    pub async fn get_weather_by_name(&self, name: &str) -> Result<WeatherData, WeatherError> {
        let locations = self.search_location(name, 1).await?;

        let Some(location) = locations.into_iter().next() else {
            return Err(WeatherError::LocationNotFound {
                query: name.to_string(),
            });
        };

        let mut weather = self
            .get_weather(location.latitude, location.longitude)
            .await?;
        weather.location = location;

        Ok(weather)
    }

    /// Drop all cached weather data and geocoding results.
    pub fn clear_cache(&self) {
        self.weather_cache.clear();
        self.geo_cache.clear();
        tracing::debug!("Caches cleared");
    }

    /// Sweep expired entries from both caches. Returns the number removed.
    pub fn prune_cache(&self) -> usize {
        self.weather_cache.prune() + self.geo_cache.prune()
    }

    /// Combined diagnostics over both caches.
    pub fn cache_stats(&self) -> CacheStats {
        let weather = self.weather_cache.stats();
        let geo = self.geo_cache.stats();
        let mut keys = weather.keys;
        keys.extend(geo.keys);
        CacheStats {
            size: weather.size + geo.size,
            keys,
        }
    }

    async fn fetch_forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError> {
        let response = self
            .client
            .get(&self.config.forecast_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", FORECAST_CURRENT_FIELDS.to_string()),
                ("hourly", FORECAST_HOURLY_FIELDS.to_string()),
                ("daily", FORECAST_DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
                ("forecast_days", "7".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Forecast API response");

        if !status.is_success() {
            return Err(WeatherError::upstream(Endpoint::Forecast, status));
        }

        Ok(response.json().await?)
    }

    async fn fetch_air_quality(
        &self,
        lat: f64,
        lon: f64,
    ) -> Result<AirQualityResponse, WeatherError> {
        let response = self
            .client
            .get(&self.config.air_quality_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("current", AIR_QUALITY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = %status, "Air quality API response");

        if !status.is_success() {
            return Err(WeatherError::upstream(Endpoint::AirQuality, status));
        }

        Ok(response.json().await?)
    }
}

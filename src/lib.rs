//! Weather data engine built on the Open-Meteo APIs.
//!
//! The engine fetches forecast, air-quality, and geocoding data, caches
//! results in memory with a TTL, and normalizes the provider's
//! column-oriented responses into one canonical [`WeatherData`] model for
//! presentation layers to consume. Best-effort by design: no retries, no
//! request deduplication, no persistent cache.

pub mod cache;
pub mod calc;
pub mod config;
pub mod descriptors;
pub mod error;
pub mod format;
pub mod weather;

pub use cache::{CacheStats, TtlCache};
pub use config::WeatherConfig;
pub use error::{Endpoint, WeatherError};
pub use weather::{
    AirQuality, CurrentWeather, DailyForecast, HourlyForecast, Location, PrecipitationType,
    PressureTrend, SunTimes, WeatherCondition, WeatherData, WeatherService, WindDirection,
};

pub mod api;
pub mod models;
pub mod normalize;
pub mod precipitation;
pub mod service;

pub use models::{
    AirQuality, CurrentWeather, DailyForecast, HourlyForecast, Location, PrecipitationType,
    PressureTrend, SunTimes, WeatherCondition, WeatherData, WindDirection,
};
pub use service::WeatherService;

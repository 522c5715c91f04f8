use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Closed enums
// ============================================================================

/// Wind direction as one of 8 compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    /// Full English name ("Northeast" etc.)
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::N => "North",
            Self::NE => "Northeast",
            Self::E => "East",
            Self::SE => "Southeast",
            Self::S => "South",
            Self::SW => "Southwest",
            Self::W => "West",
            Self::NW => "Northwest",
        }
    }
}

/// Barometric pressure tendency over the trailing observation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureTrend {
    Rising,
    Falling,
    Steady,
}

/// Precipitation phase classification from rain/snowfall magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecipitationType {
    Rain,
    Snow,
    Mixed,
    #[default]
    None,
}

impl PrecipitationType {
    /// Classify by comparing rain and snowfall amounts (both in mm).
    pub fn classify(rain: f64, snowfall: f64) -> Self {
        match (rain > 0.0, snowfall > 0.0) {
            (true, true) => Self::Mixed,
            (false, true) => Self::Snow,
            (true, false) => Self::Rain,
            (false, false) => Self::None,
        }
    }
}

/// Weather condition categories mapped from WMO weather codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Map a WMO weather code to a condition category.
    /// See: https://open-meteo.com/en/docs
    pub fn from_wmo_code(code: u16) -> Self {
        match code {
            0 | 1 => Self::Clear,
            2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Self::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Display-friendly condition name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

// ============================================================================
// Unit preferences (used by config and formatters)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindSpeedUnit {
    #[default]
    Kmh,
    Mph,
    Ms,
    Kn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "mb")]
    Mb,
    #[serde(rename = "hPa")]
    HPa,
    #[serde(rename = "inHg")]
    InHg,
}

// ============================================================================
// Domain model
// ============================================================================

/// A resolved location from geocoding (or a coordinate placeholder).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub country: String,
    pub country_code: String,
    /// State / province
    pub admin1: Option<String>,
    /// County / district
    pub admin2: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub elevation: Option<f64>,
    pub population: Option<u64>,
}

/// Current conditions. Temperatures in Celsius, wind in km/h, pressure in
/// mb, visibility in km.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub uv_index: f64,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    pub wind_gusts: Option<f64>,
    pub pressure: f64,
    pub pressure_trend: PressureTrend,
    pub visibility: f64,
    pub cloud_cover: f64,
    pub weather_code: u16,
    pub condition: WeatherCondition,
    pub is_day: bool,
    pub precipitation: Option<f64>,
    pub dew_point: Option<f64>,
    pub snowfall: Option<f64>,
    pub precipitation_type: PrecipitationType,
}

/// Sunrise/sunset in provider-local `HH:mm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
}

/// Air quality on the US AQI scale (0-500). Optional on the aggregate:
/// absence means "unavailable", never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQuality {
    pub aqi: f64,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
    pub o3: Option<f64>,
    pub no2: Option<f64>,
}

/// One hour of forecast. Times are provider-local (timezone=auto).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: NaiveDateTime,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub precipitation_probability: f64,
    pub precipitation: f64,
    pub weather_code: u16,
    pub condition: WeatherCondition,
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    pub is_day: bool,
    pub dew_point: Option<f64>,
    pub rain: Option<f64>,
    pub snowfall: Option<f64>,
    pub precipitation_type: PrecipitationType,
}

/// One day of forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub sunrise: String,
    pub sunset: String,
    pub precipitation_probability: f64,
    pub precipitation_sum: f64,
    pub weather_code: u16,
    pub condition: WeatherCondition,
    pub uv_index_max: f64,
    pub wind_speed_max: f64,
    pub wind_direction: WindDirection,
}

/// Aggregate weather data for one location: the engine's single output type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    pub location: Location,
    pub current: CurrentWeather,
    pub sun_times: SunTimes,
    pub air_quality: Option<AirQuality>,
    /// Up to 48 entries, chronological ascending
    pub hourly: Vec<HourlyForecast>,
    /// 7 entries, chronological ascending
    pub daily: Vec<DailyForecast>,
    pub last_updated: DateTime<Utc>,
    pub timezone: String,
}

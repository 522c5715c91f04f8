use serde::Deserialize;

use super::models::Location;

// ============================================================================
// Open-Meteo Forecast API Response (Internal)
// These structs deserialize the raw API response; not all fields are used.
// Hourly/daily blocks are column-oriented: parallel arrays, one per field,
// one index per hour/day.
// ============================================================================

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub timezone_abbreviation: Option<String>,
    pub utc_offset_seconds: Option<i64>,
    pub elevation: Option<f64>,
    pub current: Option<RawCurrent>,
    pub hourly: Option<RawHourly>,
    pub daily: Option<RawDaily>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct RawCurrent {
    pub time: String,
    pub interval: Option<u32>,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub apparent_temperature: f64,
    pub is_day: u8,
    pub precipitation: f64,
    #[serde(default)]
    pub rain: f64,
    #[serde(default)]
    pub showers: f64,
    #[serde(default)]
    pub snowfall: f64,
    pub weather_code: u16,
    pub cloud_cover: f64,
    pub pressure_msl: f64,
    pub surface_pressure: f64,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: f64,
    pub wind_gusts_10m: Option<f64>,
    pub dew_point_2m: Option<f64>,
    /// Meters; the feed may omit it entirely
    pub visibility: Option<f64>,
    pub uv_index: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawHourly {
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub relative_humidity_2m: Vec<f64>,
    pub apparent_temperature: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub precipitation: Vec<f64>,
    #[serde(default)]
    pub rain: Option<Vec<f64>>,
    #[serde(default)]
    pub snowfall: Option<Vec<f64>>,
    pub weather_code: Vec<u16>,
    #[serde(default)]
    pub surface_pressure: Option<Vec<f64>>,
    pub wind_speed_10m: Vec<f64>,
    pub wind_direction_10m: Vec<f64>,
    #[serde(default)]
    pub dew_point_2m: Option<Vec<f64>>,
    pub is_day: Vec<u8>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawDaily {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub precipitation_probability_max: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub weather_code: Vec<u16>,
    pub uv_index_max: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
    pub wind_direction_10m_dominant: Vec<f64>,
}

// ============================================================================
// Open-Meteo Air Quality API Response (Internal)
// ============================================================================

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct AirQualityResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub current: Option<RawAirQualityCurrent>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct RawAirQualityCurrent {
    pub time: String,
    pub interval: Option<u32>,
    pub us_aqi: Option<f64>,
    pub pm2_5: Option<f64>,
    pub pm10: Option<f64>,
    pub ozone: Option<f64>,
    pub nitrogen_dioxide: Option<f64>,
}

// ============================================================================
// Open-Meteo Geocoding API Response (Internal)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Absent entirely when the query matches nothing
    pub results: Option<Vec<GeocodingResult>>,
}

#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub country_code: Option<String>,
    pub country: Option<String>,
    pub admin1: Option<String>,
    pub admin2: Option<String>,
    pub timezone: Option<String>,
    pub population: Option<u64>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            id: result.id.to_string(),
            name: result.name,
            country: result.country.unwrap_or_default(),
            country_code: result.country_code.unwrap_or_default(),
            admin1: result.admin1,
            admin2: result.admin2,
            latitude: result.latitude,
            longitude: result.longitude,
            timezone: result.timezone.unwrap_or_default(),
            elevation: result.elevation,
            population: result.population,
        }
    }
}

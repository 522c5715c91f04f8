//! Derived meteorological calculations: pure functions, no shared state.

use chrono::{Datelike, NaiveDate};

use crate::weather::models::{PressureTrend, WindDirection};

/// Pressure change (mb) across the sample window that counts as a trend.
pub const DEFAULT_PRESSURE_THRESHOLD_MB: f64 = 1.5;

/// Classify the pressure trend from a trailing window of readings
/// (oldest first), using the default 1.5 mb threshold.
pub fn pressure_trend(history: &[f64]) -> PressureTrend {
    pressure_trend_with_threshold(history, DEFAULT_PRESSURE_THRESHOLD_MB)
}

/// Classify the pressure trend with an explicit threshold.
/// Fewer than 2 samples cannot show a tendency and report `Steady`.
pub fn pressure_trend_with_threshold(history: &[f64], threshold: f64) -> PressureTrend {
    if history.len() < 2 {
        return PressureTrend::Steady;
    }

    let change = history[history.len() - 1] - history[0];
    if change > threshold {
        PressureTrend::Rising
    } else if change < -threshold {
        PressureTrend::Falling
    } else {
        PressureTrend::Steady
    }
}

/// Bucket wind direction degrees into one of 8 compass points.
/// 0° = N, 90° = E; each point spans 45° centered on its heading.
pub fn compass_direction(degrees: f64) -> WindDirection {
    const DIRECTIONS: [WindDirection; 8] = [
        WindDirection::N,
        WindDirection::NE,
        WindDirection::E,
        WindDirection::SE,
        WindDirection::S,
        WindDirection::SW,
        WindDirection::W,
        WindDirection::NW,
    ];

    let normalized = ((degrees % 360.0) + 360.0) % 360.0;
    let index = (normalized / 45.0).round() as usize % 8;
    DIRECTIONS[index]
}

/// Heat index via the NWS Rothfusz regression. The regression is only
/// valid at or above 80°F (26.7°C); below that the input temperature is
/// returned unchanged. Input/output in Celsius, humidity in percent.
pub fn heat_index(temp_c: f64, humidity: f64) -> f64 {
    let t = temp_c * 9.0 / 5.0 + 32.0;

    if t < 80.0 {
        return temp_c;
    }

    let rh = humidity;
    let hi = -42.379 + 2.04901523 * t + 10.14333127 * rh
        - 0.22475541 * t * rh
        - 0.00683783 * t * t
        - 0.05481717 * rh * rh
        + 0.00122874 * t * t * rh
        + 0.00085282 * t * rh * rh
        - 0.00000199 * t * t * rh * rh;

    (hi - 32.0) * 5.0 / 9.0
}

/// Wind chill via the Environment Canada formula. Only valid at or below
/// 10°C with wind of at least 4.8 km/h; otherwise the input temperature is
/// returned unchanged.
pub fn wind_chill(temp_c: f64, wind_speed_kmh: f64) -> f64 {
    if temp_c > 10.0 || wind_speed_kmh < 4.8 {
        return temp_c;
    }

    13.12 + 0.6215 * temp_c - 11.37 * wind_speed_kmh.powf(0.16)
        + 0.3965 * temp_c * wind_speed_kmh.powf(0.16)
}

/// Locally computed apparent temperature: heat index when hot, wind chill
/// when cold and windy, the raw temperature otherwise.
///
/// The normalization pipeline sources `feels_like` from the provider's own
/// apparent-temperature field, which also accounts for radiation; this
/// selector is the standalone alternative for callers without that field.
pub fn feels_like(temp_c: f64, humidity: f64, wind_speed_kmh: f64) -> f64 {
    if temp_c >= 27.0 {
        heat_index(temp_c, humidity)
    } else if temp_c <= 10.0 && wind_speed_kmh >= 4.8 {
        wind_chill(temp_c, wind_speed_kmh)
    } else {
        temp_c
    }
}

/// Dew point via the Magnus-Tetens approximation.
pub fn dew_point(temp_c: f64, humidity: f64) -> f64 {
    const A: f64 = 17.27;
    const B: f64 = 237.7;

    let gamma = (A * temp_c) / (B + temp_c) + (humidity / 100.0).ln();
    (B * gamma) / (A - gamma)
}

/// Estimate solar noon (UTC) for a longitude and date, as `HH:mm`.
/// Uses a day-of-year equation-of-time approximation.
pub fn solar_noon(longitude: f64, date: NaiveDate) -> String {
    let day_of_year = f64::from(date.ordinal());

    // Equation of time approximation, in minutes
    let b = (360.0 / 365.0) * (day_of_year - 81.0) * std::f64::consts::PI / 180.0;
    let eot = 9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin();

    let solar_noon_utc = 12.0 - longitude / 15.0 - eot / 60.0;

    // Round to whole minutes first, then wrap into a 24-hour clock, so
    // neither a :60 minute nor a negative hour can surface.
    let total_minutes = (solar_noon_utc * 60.0).round() as i64;
    let total_minutes = total_minutes.rem_euclid(24 * 60);
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// UV index as a 0-100 percentage for progress-bar consumers (scale of 12).
pub fn uv_index_percent(uv_index: f64) -> f64 {
    ((uv_index / 12.0) * 100.0).clamp(0.0, 100.0)
}

/// US AQI as a 0-100 percentage for progress-bar consumers (scale of 500).
pub fn aqi_percent(aqi: f64) -> f64 {
    ((aqi / 500.0) * 100.0).clamp(0.0, 100.0)
}

/// Daylight duration between `HH:mm` sunrise and sunset, as "12h 30m".
/// A sunset earlier than sunrise is taken to cross midnight.
pub fn daylight_duration(sunrise: &str, sunset: &str) -> String {
    let sunrise_minutes = parse_minutes(sunrise);
    let sunset_minutes = parse_minutes(sunset);

    let mut duration = sunset_minutes - sunrise_minutes;
    if duration < 0 {
        duration += 24 * 60;
    }

    format!("{}h {}m", duration / 60, duration % 60)
}

fn parse_minutes(time: &str) -> i32 {
    let mut parts = time.splitn(2, ':');
    let hours: i32 = parts.next().and_then(|h| h.parse().ok()).unwrap_or(0);
    let minutes: i32 = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);
    hours * 60 + minutes
}

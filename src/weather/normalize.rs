//! Transforms raw Open-Meteo responses (column-oriented parallel arrays)
//! into the row-oriented domain model.

use chrono::{NaiveDate, NaiveDateTime, Utc};

use super::api::{AirQualityResponse, ForecastResponse, RawHourly};
use super::models::{
    AirQuality, CurrentWeather, DailyForecast, HourlyForecast, Location, PrecipitationType,
    SunTimes, WeatherCondition, WeatherData,
};
use crate::calc;
use crate::error::WeatherError;

/// Substituted when the feed omits visibility entirely.
const DEFAULT_VISIBILITY_KM: f64 = 10.0;

/// Trailing hourly samples fed to the pressure-trend classifier.
const PRESSURE_WINDOW_HOURS: usize = 6;

/// Hourly entries are capped at 48 (2 days of a 7-day feed).
const MAX_HOURLY_ENTRIES: usize = 48;

/// Build a [`WeatherData`] aggregate from the forecast response and the
/// optional air-quality enrichment.
///
/// The location carries a coordinate placeholder identity; callers that
/// resolved the coordinates through geocoding overwrite it afterwards.
pub fn normalize(
    forecast: ForecastResponse,
    air_quality: Option<AirQualityResponse>,
) -> Result<WeatherData, WeatherError> {
    let current = forecast
        .current
        .ok_or_else(|| WeatherError::InvalidResponse("missing current block".to_string()))?;
    let hourly = forecast
        .hourly
        .ok_or_else(|| WeatherError::InvalidResponse("missing hourly block".to_string()))?;
    let daily = forecast
        .daily
        .ok_or_else(|| WeatherError::InvalidResponse("missing daily block".to_string()))?;

    if daily.time.is_empty() {
        return Err(WeatherError::InvalidResponse(
            "empty daily block".to_string(),
        ));
    }

    let pressure_history = pressure_window(&hourly, current.surface_pressure);

    let current_weather = CurrentWeather {
        temperature: current.temperature_2m,
        feels_like: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        uv_index: current
            .uv_index
            .or_else(|| daily.uv_index_max.first().copied())
            .unwrap_or(0.0),
        wind_speed: current.wind_speed_10m,
        wind_direction: calc::compass_direction(current.wind_direction_10m),
        wind_gusts: current.wind_gusts_10m,
        pressure: current.surface_pressure,
        pressure_trend: calc::pressure_trend(&pressure_history),
        visibility: current
            .visibility
            .map(|meters| meters / 1000.0)
            .unwrap_or(DEFAULT_VISIBILITY_KM),
        cloud_cover: current.cloud_cover,
        weather_code: current.weather_code,
        condition: WeatherCondition::from_wmo_code(current.weather_code),
        is_day: current.is_day == 1,
        precipitation: Some(current.precipitation),
        dew_point: current.dew_point_2m,
        snowfall: Some(current.snowfall),
        precipitation_type: PrecipitationType::classify(
            current.rain + current.showers,
            current.snowfall,
        ),
    };

    let sun_times = SunTimes {
        sunrise: daily.sunrise.first().map_or_else(String::new, |s| extract_time(s)),
        sunset: daily.sunset.first().map_or_else(String::new, |s| extract_time(s)),
    };

    let air_quality = air_quality
        .and_then(|response| response.current)
        .and_then(|current| {
            current.us_aqi.map(|aqi| AirQuality {
                aqi,
                pm25: current.pm2_5,
                pm10: current.pm10,
                o3: current.ozone,
                no2: current.nitrogen_dioxide,
            })
        });

    let hourly_forecasts = normalize_hourly(&hourly)?;
    let daily_forecasts = normalize_daily(&daily)?;

    Ok(WeatherData {
        location: Location {
            id: format!("{},{}", forecast.latitude, forecast.longitude),
            // Overwritten by the caller when geocoding supplied an identity
            name: "Unknown".to_string(),
            country: String::new(),
            country_code: String::new(),
            admin1: None,
            admin2: None,
            latitude: forecast.latitude,
            longitude: forecast.longitude,
            timezone: forecast.timezone.clone(),
            elevation: forecast.elevation,
            population: None,
        },
        current: current_weather,
        sun_times,
        air_quality,
        hourly: hourly_forecasts,
        daily: daily_forecasts,
        last_updated: Utc::now(),
        timezone: forecast.timezone,
    })
}

/// Trailing pressure window for the trend classifier (oldest first).
/// Falls back to the current pressure repeated when the feed carries no
/// hourly surface pressure, which deterministically reads as steady.
fn pressure_window(hourly: &RawHourly, current_pressure: f64) -> Vec<f64> {
    match &hourly.surface_pressure {
        Some(samples) if samples.len() >= 2 => {
            samples.iter().take(PRESSURE_WINDOW_HOURS).copied().collect()
        }
        _ => vec![current_pressure; PRESSURE_WINDOW_HOURS],
    }
}

fn normalize_hourly(hourly: &RawHourly) -> Result<Vec<HourlyForecast>, WeatherError> {
    hourly
        .time
        .iter()
        .take(MAX_HOURLY_ENTRIES)
        .enumerate()
        .map(|(i, time)| {
            let time = parse_local_timestamp(time)?;
            let weather_code = hourly.weather_code.get(i).copied().unwrap_or_default();
            let rain = opt_column(&hourly.rain, i);
            let snowfall = opt_column(&hourly.snowfall, i);

            Ok(HourlyForecast {
                time,
                temperature: column(&hourly.temperature_2m, i),
                feels_like: column(&hourly.apparent_temperature, i),
                humidity: column(&hourly.relative_humidity_2m, i),
                precipitation_probability: column(&hourly.precipitation_probability, i),
                precipitation: column(&hourly.precipitation, i),
                weather_code,
                condition: WeatherCondition::from_wmo_code(weather_code),
                wind_speed: column(&hourly.wind_speed_10m, i),
                wind_direction: calc::compass_direction(column(&hourly.wind_direction_10m, i)),
                is_day: hourly.is_day.get(i).copied().unwrap_or_default() == 1,
                dew_point: opt_column(&hourly.dew_point_2m, i),
                rain,
                snowfall,
                precipitation_type: PrecipitationType::classify(
                    rain.unwrap_or(0.0),
                    snowfall.unwrap_or(0.0),
                ),
            })
        })
        .collect()
}

fn normalize_daily(
    daily: &super::api::RawDaily,
) -> Result<Vec<DailyForecast>, WeatherError> {
    daily
        .time
        .iter()
        .enumerate()
        .map(|(i, date)| {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
                WeatherError::InvalidResponse(format!("bad daily date {date:?}: {e}"))
            })?;
            let weather_code = daily.weather_code.get(i).copied().unwrap_or_default();

            Ok(DailyForecast {
                date,
                temperature_max: column(&daily.temperature_2m_max, i),
                temperature_min: column(&daily.temperature_2m_min, i),
                sunrise: daily.sunrise.get(i).map(|s| extract_time(s)).unwrap_or_default(),
                sunset: daily.sunset.get(i).map(|s| extract_time(s)).unwrap_or_default(),
                precipitation_probability: column(&daily.precipitation_probability_max, i),
                precipitation_sum: column(&daily.precipitation_sum, i),
                weather_code,
                condition: WeatherCondition::from_wmo_code(weather_code),
                uv_index_max: column(&daily.uv_index_max, i),
                wind_speed_max: column(&daily.wind_speed_10m_max, i),
                wind_direction: calc::compass_direction(column(
                    &daily.wind_direction_10m_dominant,
                    i,
                )),
            })
        })
        .collect()
}

/// Read one cell of a column array; ragged columns read as 0.
fn column(values: &[f64], i: usize) -> f64 {
    values.get(i).copied().unwrap_or(0.0)
}

fn opt_column(values: &Option<Vec<f64>>, i: usize) -> Option<f64> {
    values.as_ref().and_then(|v| v.get(i)).copied()
}

fn parse_local_timestamp(value: &str) -> Result<NaiveDateTime, WeatherError> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|e| WeatherError::InvalidResponse(format!("bad timestamp {value:?}: {e}")))
}

/// Extract `HH:mm` from a provider-local ISO-8601 string. Reads the local
/// hour/minute fields as-is; no timezone conversion beyond what the
/// provider already applied.
pub fn extract_time(iso: &str) -> String {
    match parse_local_timestamp(iso) {
        Ok(time) => time.format("%H:%M").to_string(),
        // Salvage the HH:mm slice from an otherwise unparseable string
        Err(_) => iso.get(11..16).unwrap_or("00:00").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::api::{RawAirQualityCurrent, RawCurrent, RawDaily};
    use crate::weather::models::PressureTrend;

    fn sample_current() -> RawCurrent {
        RawCurrent {
            time: "2024-06-01T12:00".to_string(),
            interval: Some(900),
            temperature_2m: 21.5,
            relative_humidity_2m: 55.0,
            apparent_temperature: 22.1,
            is_day: 1,
            precipitation: 0.0,
            rain: 0.0,
            showers: 0.0,
            snowfall: 0.0,
            weather_code: 2,
            cloud_cover: 40.0,
            pressure_msl: 1015.0,
            surface_pressure: 1012.0,
            wind_speed_10m: 14.0,
            wind_direction_10m: 90.0,
            wind_gusts_10m: Some(25.0),
            dew_point_2m: Some(11.8),
            visibility: Some(24_140.0),
            uv_index: None,
        }
    }

    fn sample_hourly(hours: usize) -> RawHourly {
        RawHourly {
            time: (0..hours)
                .map(|h| format!("2024-06-0{}T{:02}:00", 1 + h / 24, h % 24))
                .collect(),
            temperature_2m: vec![18.0; hours],
            relative_humidity_2m: vec![60.0; hours],
            apparent_temperature: vec![17.5; hours],
            precipitation_probability: vec![10.0; hours],
            precipitation: vec![0.0; hours],
            rain: Some(vec![0.0; hours]),
            snowfall: Some(vec![0.0; hours]),
            weather_code: vec![1; hours],
            surface_pressure: Some(vec![1010.0; hours]),
            wind_speed_10m: vec![12.0; hours],
            wind_direction_10m: vec![180.0; hours],
            dew_point_2m: Some(vec![10.0; hours]),
            is_day: (0..hours).map(|h| u8::from(h % 24 >= 6 && h % 24 < 20)).collect(),
        }
    }

    fn sample_daily(days: usize) -> RawDaily {
        RawDaily {
            time: (0..days).map(|d| format!("2024-06-{:02}", d + 1)).collect(),
            temperature_2m_max: vec![24.0; days],
            temperature_2m_min: vec![14.0; days],
            sunrise: (0..days)
                .map(|d| format!("2024-06-{:02}T05:12", d + 1))
                .collect(),
            sunset: (0..days)
                .map(|d| format!("2024-06-{:02}T21:03", d + 1))
                .collect(),
            precipitation_probability_max: vec![20.0; days],
            precipitation_sum: vec![0.4; days],
            weather_code: vec![61; days],
            uv_index_max: vec![6.5; days],
            wind_speed_10m_max: vec![22.0; days],
            wind_direction_10m_dominant: vec![225.0; days],
        }
    }

    fn sample_forecast() -> ForecastResponse {
        ForecastResponse {
            latitude: 40.7128,
            longitude: -74.006,
            timezone: "America/New_York".to_string(),
            timezone_abbreviation: Some("EDT".to_string()),
            utc_offset_seconds: Some(-14_400),
            elevation: Some(10.0),
            current: Some(sample_current()),
            hourly: Some(sample_hourly(72)),
            daily: Some(sample_daily(7)),
        }
    }

    #[test]
    fn test_normalize_basic_fields() {
        let data = normalize(sample_forecast(), None).expect("normalize");
        assert_eq!(data.current.temperature, 21.5);
        assert_eq!(data.current.feels_like, 22.1);
        assert_eq!(data.current.condition, WeatherCondition::PartlyCloudy);
        assert!(data.current.is_day);
        assert_eq!(data.timezone, "America/New_York");
        assert_eq!(data.location.name, "Unknown");
        assert_eq!(data.location.id, "40.7128,-74.006");
    }

    #[test]
    fn test_visibility_converted_to_km() {
        let data = normalize(sample_forecast(), None).expect("normalize");
        assert!((data.current.visibility - 24.14).abs() < 1e-9);
    }

    #[test]
    fn test_visibility_defaults_to_10km_when_absent() {
        let mut forecast = sample_forecast();
        forecast.current.as_mut().unwrap().visibility = None;
        let data = normalize(forecast, None).expect("normalize");
        assert_eq!(data.current.visibility, DEFAULT_VISIBILITY_KM);
    }

    #[test]
    fn test_uv_index_falls_back_to_daily_max() {
        let data = normalize(sample_forecast(), None).expect("normalize");
        assert_eq!(data.current.uv_index, 6.5);
    }

    #[test]
    fn test_sun_times_extracted_from_first_day() {
        let data = normalize(sample_forecast(), None).expect("normalize");
        assert_eq!(data.sun_times.sunrise, "05:12");
        assert_eq!(data.sun_times.sunset, "21:03");
    }

    #[test]
    fn test_hourly_capped_at_48_and_ordered() {
        let data = normalize(sample_forecast(), None).expect("normalize");
        assert_eq!(data.hourly.len(), 48);
        for pair in data.hourly.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn test_daily_preserves_provider_ordering() {
        let data = normalize(sample_forecast(), None).expect("normalize");
        assert_eq!(data.daily.len(), 7);
        for pair in data.daily.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
        assert_eq!(data.daily[0].condition, WeatherCondition::Rain);
    }

    #[test]
    fn test_pressure_trend_from_hourly_history() {
        let mut forecast = sample_forecast();
        let hourly = forecast.hourly.as_mut().unwrap();
        hourly.surface_pressure = Some(vec![1000.0, 1001.0, 1002.0, 1003.0, 1004.0, 1005.0]);
        let data = normalize(forecast, None).expect("normalize");
        assert_eq!(data.current.pressure_trend, PressureTrend::Rising);
    }

    #[test]
    fn test_pressure_trend_fallback_reads_steady() {
        let mut forecast = sample_forecast();
        forecast.hourly.as_mut().unwrap().surface_pressure = None;
        let data = normalize(forecast, None).expect("normalize");
        assert_eq!(data.current.pressure_trend, PressureTrend::Steady);
    }

    #[test]
    fn test_missing_current_block_is_invalid_response() {
        let mut forecast = sample_forecast();
        forecast.current = None;
        let err = normalize(forecast, None).expect_err("should fail");
        assert!(matches!(err, WeatherError::InvalidResponse(_)));
    }

    #[test]
    fn test_air_quality_mapped_when_present() {
        let air = AirQualityResponse {
            latitude: 40.7,
            longitude: -74.0,
            current: Some(RawAirQualityCurrent {
                time: "2024-06-01T12:00".to_string(),
                interval: Some(3600),
                us_aqi: Some(42.0),
                pm2_5: Some(8.1),
                pm10: Some(15.0),
                ozone: Some(60.0),
                nitrogen_dioxide: Some(12.0),
            }),
        };
        let data = normalize(sample_forecast(), Some(air)).expect("normalize");
        let aq = data.air_quality.expect("air quality present");
        assert_eq!(aq.aqi, 42.0);
        assert_eq!(aq.pm25, Some(8.1));
    }

    #[test]
    fn test_air_quality_absent_without_aqi_value() {
        let air = AirQualityResponse {
            latitude: 40.7,
            longitude: -74.0,
            current: Some(RawAirQualityCurrent {
                time: "2024-06-01T12:00".to_string(),
                interval: Some(3600),
                us_aqi: None,
                pm2_5: None,
                pm10: None,
                ozone: None,
                nitrogen_dioxide: None,
            }),
        };
        let data = normalize(sample_forecast(), Some(air)).expect("normalize");
        assert!(data.air_quality.is_none());
    }

    #[test]
    fn test_hourly_precipitation_type() {
        let mut forecast = sample_forecast();
        {
            let hourly = forecast.hourly.as_mut().unwrap();
            hourly.rain.as_mut().unwrap()[0] = 1.0;
            hourly.snowfall.as_mut().unwrap()[0] = 0.5;
            hourly.rain.as_mut().unwrap()[1] = 0.0;
            hourly.snowfall.as_mut().unwrap()[1] = 0.7;
        }
        let data = normalize(forecast, None).expect("normalize");
        assert_eq!(data.hourly[0].precipitation_type, PrecipitationType::Mixed);
        assert_eq!(data.hourly[1].precipitation_type, PrecipitationType::Snow);
        assert_eq!(data.hourly[2].precipitation_type, PrecipitationType::None);
    }

    #[test]
    fn test_extract_time_fallback_slice() {
        assert_eq!(extract_time("2024-06-01T05:12"), "05:12");
        assert_eq!(extract_time("2024-06-01X07:45:00"), "07:45");
        assert_eq!(extract_time("garbage"), "00:00");
    }
}

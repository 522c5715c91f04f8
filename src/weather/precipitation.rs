//! Precipitation analysis over the normalized forecast sequences.

use super::models::{DailyForecast, HourlyForecast, PrecipitationType};

/// Probability (%) at or above which an hour counts as a precipitation event.
pub const DEFAULT_PRECIPITATION_THRESHOLD: f64 = 40.0;

/// An upcoming precipitation event found in the hourly forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationEvent {
    /// Hours from the start of the forecast (0 = the current hour)
    pub hours_until: usize,
    pub probability: f64,
    pub amount: f64,
}

/// Totals over an hourly window, broken down by phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecipitationAccumulation {
    pub total: f64,
    pub rain: f64,
    pub snow: f64,
    pub precipitation_type: PrecipitationType,
}

/// Weekly totals over the daily forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyPrecipitation {
    pub total: f64,
    pub days: usize,
    pub average: f64,
}

/// Find the first hour whose precipitation probability meets `threshold`.
pub fn next_precipitation(
    hourly: &[HourlyForecast],
    threshold: f64,
) -> Option<PrecipitationEvent> {
    hourly
        .iter()
        .enumerate()
        .find(|(_, hour)| hour.precipitation_probability >= threshold)
        .map(|(i, hour)| PrecipitationEvent {
            hours_until: i,
            probability: hour.precipitation_probability,
            amount: hour.precipitation,
        })
}

/// Accumulate precipitation over the first `hours` entries.
pub fn accumulation(hourly: &[HourlyForecast], hours: usize) -> PrecipitationAccumulation {
    let window = &hourly[..hours.min(hourly.len())];

    let total: f64 = window.iter().map(|h| h.precipitation).sum();
    let rain: f64 = window.iter().filter_map(|h| h.rain).sum();
    let snow: f64 = window.iter().filter_map(|h| h.snowfall).sum();

    let precipitation_type = if total > 0.0 {
        PrecipitationType::classify(rain, snow)
    } else {
        PrecipitationType::None
    };

    PrecipitationAccumulation {
        total,
        rain,
        snow,
        precipitation_type,
    }
}

/// Total and average precipitation across the daily forecast.
pub fn weekly_totals(daily: &[DailyForecast]) -> WeeklyPrecipitation {
    let total: f64 = daily.iter().map(|d| d.precipitation_sum).sum();
    let days = daily.len();
    WeeklyPrecipitation {
        total,
        days,
        average: if days == 0 { 0.0 } else { total / days as f64 },
    }
}

/// Human-readable alert line for an upcoming event (or its absence).
pub fn precipitation_alert(event: Option<&PrecipitationEvent>) -> String {
    let Some(event) = event else {
        return "No rain expected in next 48 hours".to_string();
    };

    match event.hours_until {
        0 => "Rain starting now".to_string(),
        1 => "Rain in 1 hour".to_string(),
        h if h < 24 => format!("Rain in {h} hours"),
        h => {
            let days = h / 24;
            if days > 1 {
                format!("Rain in {days} days")
            } else {
                "Rain in 1 day".to_string()
            }
        }
    }
}

//! Unit conversions and display formatting for domain values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::weather::models::{
    PressureTrend, PressureUnit, TemperatureUnit, WindDirection, WindSpeedUnit,
};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Format a Celsius temperature with unit suffix, e.g. "21°C" or "70°F".
pub fn format_temperature(temp_c: f64, unit: TemperatureUnit) -> String {
    let (value, symbol) = match unit {
        TemperatureUnit::Celsius => (temp_c, 'C'),
        TemperatureUnit::Fahrenheit => (celsius_to_fahrenheit(temp_c), 'F'),
    };
    format!("{}°{}", value.round() as i64, symbol)
}

/// Format a Celsius temperature with just the degree sign, e.g. "21°".
pub fn format_temp(temp_c: f64, unit: TemperatureUnit) -> String {
    let value = match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(temp_c),
    };
    format!("{}°", value.round() as i64)
}

/// Format a km/h wind speed in the requested unit.
pub fn format_wind_speed(speed_kmh: f64, unit: WindSpeedUnit) -> String {
    let (value, suffix) = match unit {
        WindSpeedUnit::Kmh => (speed_kmh, "km/h"),
        WindSpeedUnit::Mph => (speed_kmh * 0.621_371, "mph"),
        WindSpeedUnit::Ms => (speed_kmh / 3.6, "m/s"),
        WindSpeedUnit::Kn => (speed_kmh * 0.539_957, "kn"),
    };
    format!("{} {}", value.round() as i64, suffix)
}

/// Format a pressure reading (mb) in the requested unit.
pub fn format_pressure(pressure_mb: f64, unit: PressureUnit) -> String {
    match unit {
        PressureUnit::Mb => format!("{} mb", pressure_mb.round() as i64),
        PressureUnit::HPa => format!("{} hPa", pressure_mb.round() as i64),
        PressureUnit::InHg => format!("{:.2} inHg", pressure_mb * 0.02953),
    }
}

/// Format visibility in km; sub-10 km distances keep one decimal.
pub fn format_visibility(km: f64) -> String {
    if km >= 10.0 {
        format!("{} km", km.round() as i64)
    } else {
        format!("{km:.1} km")
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", value.round() as i64)
}

/// Arrow glyph pointing where the wind comes from.
pub fn direction_arrow(direction: WindDirection) -> &'static str {
    match direction {
        WindDirection::N => "↑",
        WindDirection::NE => "↗",
        WindDirection::E => "→",
        WindDirection::SE => "↘",
        WindDirection::S => "↓",
        WindDirection::SW => "↙",
        WindDirection::W => "←",
        WindDirection::NW => "↖",
    }
}

pub fn pressure_trend_symbol(trend: PressureTrend) -> &'static str {
    match trend {
        PressureTrend::Rising => "▲",
        PressureTrend::Falling => "▼",
        PressureTrend::Steady => "—",
    }
}

/// Clock display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    Hour24,
    Hour12,
}

/// Format a local timestamp as "14:05" or "2:05 PM".
pub fn format_time(time: NaiveDateTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::Hour24 => time.format("%H:%M").to_string(),
        TimeFormat::Hour12 => time.format("%-I:%M %p").to_string(),
    }
}

/// Format a date as "Mon, Jun 3".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Uppercased short weekday, e.g. "MON".
pub fn format_day_short(date: NaiveDate) -> String {
    date.format("%a").to_string().to_uppercase()
}

/// Relative age of a timestamp, e.g. "5 min ago".
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - timestamp).num_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    format!("{}d ago", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_temperature_conversions() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(fahrenheit_to_celsius(32.0), 0.0);
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(format_temperature(21.4, TemperatureUnit::Celsius), "21°C");
        assert_eq!(format_temperature(0.0, TemperatureUnit::Fahrenheit), "32°F");
        assert_eq!(format_temp(21.4, TemperatureUnit::Celsius), "21°");
    }

    #[test]
    fn test_format_wind_speed() {
        assert_eq!(format_wind_speed(10.0, WindSpeedUnit::Kmh), "10 km/h");
        assert_eq!(format_wind_speed(10.0, WindSpeedUnit::Mph), "6 mph");
        assert_eq!(format_wind_speed(36.0, WindSpeedUnit::Ms), "10 m/s");
    }

    #[test]
    fn test_format_pressure() {
        assert_eq!(format_pressure(1013.2, PressureUnit::Mb), "1013 mb");
        assert_eq!(format_pressure(1013.2, PressureUnit::InHg), "29.92 inHg");
    }

    #[test]
    fn test_format_visibility_precision() {
        assert_eq!(format_visibility(12.3), "12 km");
        assert_eq!(format_visibility(3.47), "3.5 km");
    }

    #[test]
    fn test_direction_arrow_and_trend_symbol() {
        assert_eq!(direction_arrow(WindDirection::N), "↑");
        assert_eq!(direction_arrow(WindDirection::SW), "↙");
        assert_eq!(pressure_trend_symbol(PressureTrend::Falling), "▼");
    }

    #[test]
    fn test_format_time_styles() {
        let t = NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(format_time(t, TimeFormat::Hour24), "14:05");
        assert_eq!(format_time(t, TimeFormat::Hour12), "2:05 PM");
    }

    #[test]
    fn test_format_relative_time() {
        assert_eq!(format_relative_time(Utc::now()), "Just now");
        assert_eq!(
            format_relative_time(Utc::now() - Duration::minutes(5)),
            "5 min ago"
        );
        assert_eq!(
            format_relative_time(Utc::now() - Duration::hours(3)),
            "3h ago"
        );
        assert_eq!(
            format_relative_time(Utc::now() - Duration::days(2)),
            "2d ago"
        );
    }
}

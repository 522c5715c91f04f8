//! Qualitative descriptions for weather metrics, used by the presentation
//! surfaces alongside the numeric domain model.

use crate::weather::models::PressureTrend;

/// UV index severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    pub fn from_index(uv_index: f64) -> Self {
        if uv_index < 3.0 {
            Self::Low
        } else if uv_index < 6.0 {
            Self::Moderate
        } else if uv_index < 8.0 {
            Self::High
        } else if uv_index < 11.0 {
            Self::VeryHigh
        } else {
            Self::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
            Self::VeryHigh => "VERY HIGH",
            Self::Extreme => "EXTREME",
        }
    }

    /// Protection advice for this level.
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Moderate => "Moderate risk",
            Self::High => "Wear sunscreen",
            Self::VeryHigh => "Seek shade, wear sunscreen",
            Self::Extreme => "Avoid sun exposure",
        }
    }
}

/// US AQI rating bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AqiRating {
    Excellent,
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiRating {
    pub fn from_aqi(aqi: f64) -> Self {
        if aqi <= 50.0 {
            Self::Excellent
        } else if aqi <= 100.0 {
            Self::Good
        } else if aqi <= 150.0 {
            Self::Moderate
        } else if aqi <= 200.0 {
            Self::Unhealthy
        } else if aqi <= 300.0 {
            Self::VeryUnhealthy
        } else {
            Self::Hazardous
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "EXCELLENT",
            Self::Good => "GOOD",
            Self::Moderate => "MODERATE",
            Self::Unhealthy => "UNHEALTHY",
            Self::VeryUnhealthy => "VERY UNHEALTHY",
            Self::Hazardous => "HAZARDOUS",
        }
    }

    /// Health guidance for this band.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Great for outdoor activity",
            Self::Good => "Acceptable air quality",
            Self::Moderate => "Sensitive groups may be affected",
            Self::Unhealthy => "Everyone may experience effects",
            Self::VeryUnhealthy => "Health warnings",
            Self::Hazardous => "Hazardous conditions",
        }
    }
}

/// Humidity comfort level.
pub fn humidity_description(humidity: f64) -> &'static str {
    if humidity < 30.0 {
        "Dry"
    } else if humidity < 60.0 {
        "Comfortable"
    } else if humidity < 80.0 {
        "Humid"
    } else {
        "Very humid"
    }
}

/// Beaufort-scale wind description for a speed in km/h.
pub fn wind_beaufort(speed_kmh: f64) -> &'static str {
    if speed_kmh < 1.0 {
        "Calm"
    } else if speed_kmh < 4.0 {
        "Light air"
    } else if speed_kmh < 8.0 {
        "Light breeze"
    } else if speed_kmh < 13.0 {
        "Gentle breeze"
    } else if speed_kmh < 19.0 {
        "Moderate breeze"
    } else if speed_kmh < 25.0 {
        "Fresh breeze"
    } else if speed_kmh < 32.0 {
        "Strong breeze"
    } else if speed_kmh < 39.0 {
        "Near gale"
    } else if speed_kmh < 47.0 {
        "Gale"
    } else if speed_kmh < 55.0 {
        "Strong gale"
    } else if speed_kmh < 64.0 {
        "Storm"
    } else {
        "Violent storm"
    }
}

/// Visibility description for a distance in km.
pub fn visibility_description(km: f64) -> &'static str {
    if km >= 10.0 {
        "Clear view"
    } else if km >= 4.0 {
        "Moderate visibility"
    } else if km >= 1.0 {
        "Poor visibility"
    } else {
        "Very poor visibility"
    }
}

/// Cloud cover description for a percentage.
pub fn cloud_cover_description(percent: f64) -> &'static str {
    if percent < 10.0 {
        "Clear skies"
    } else if percent < 25.0 {
        "Mostly clear"
    } else if percent < 50.0 {
        "Partly cloudy"
    } else if percent < 75.0 {
        "Mostly cloudy"
    } else {
        "Overcast"
    }
}

/// Precipitation intensity description for an hourly amount in mm.
pub fn precipitation_description(mm: f64) -> &'static str {
    if mm == 0.0 {
        "No precipitation"
    } else if mm < 0.5 {
        "Trace amounts"
    } else if mm < 2.5 {
        "Light precipitation"
    } else if mm < 7.5 {
        "Moderate precipitation"
    } else if mm < 20.0 {
        "Heavy precipitation"
    } else {
        "Very heavy precipitation"
    }
}

/// Forecast interpretation of a pressure trend.
pub fn pressure_trend_description(trend: PressureTrend) -> &'static str {
    match trend {
        PressureTrend::Rising => "Rising - improving weather",
        PressureTrend::Falling => "Falling - worsening weather",
        PressureTrend::Steady => "Steady - stable conditions",
    }
}

/// How the apparent temperature compares to the measured one.
pub fn feels_like_comparison(feels_like: f64, actual: f64) -> String {
    let diff = (feels_like - actual).abs();

    if diff < 2.0 {
        return "Similar to actual".to_string();
    }

    if feels_like < actual {
        format!("Cooler than actual ({}°)", actual.round() as i64)
    } else {
        format!("Warmer than actual ({}°)", actual.round() as i64)
    }
}

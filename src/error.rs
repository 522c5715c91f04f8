use reqwest::StatusCode;
use thiserror::Error;

/// Upstream endpoint identifier, carried in errors so callers can tell
/// which request failed without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Forecast,
    AirQuality,
    Geocoding,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Endpoint::Forecast => "forecast",
            Endpoint::AirQuality => "air quality",
            Endpoint::Geocoding => "geocoding",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum WeatherError {
    /// Non-2xx status from an upstream endpoint.
    #[error("{endpoint} API error: {status}")]
    Upstream { endpoint: Endpoint, status: StatusCode },

    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// Transport-level failure (connect, timeout, body decode).
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// 2xx response whose payload is structurally unusable.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl WeatherError {
    pub fn upstream(endpoint: Endpoint, status: StatusCode) -> Self {
        Self::Upstream { endpoint, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_names_endpoint_and_status() {
        let err = WeatherError::upstream(Endpoint::Forecast, StatusCode::BAD_GATEWAY);
        let msg = err.to_string();
        assert!(msg.contains("forecast"));
        assert!(msg.contains("502"));
    }

    #[test]
    fn test_location_not_found_message() {
        let err = WeatherError::LocationNotFound {
            query: "Nowhereville".to_string(),
        };
        assert_eq!(err.to_string(), "Location not found: Nowhereville");
    }
}

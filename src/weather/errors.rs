//! # Weather Errors

use thiserror::Error;

/// Result type for weather lookups
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Weather lookup errors
#[derive(Debug, Clone, Error)]
pub enum WeatherError {
    /// The API answered non-2xx (unknown city, bad key)
    #[error("No weather found.")]
    NoWeather,

    /// The request never completed (DNS, connect, transport)
    #[error("Request failed: {0}")]
    Request(String),

    /// A 2xx response whose body did not match the documented shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl WeatherError {
    /// Stable error code string for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            WeatherError::NoWeather => "KITBAG_WEATHER_NOT_FOUND",
            WeatherError::Request(_) => "KITBAG_WEATHER_REQUEST",
            WeatherError::Decode(_) => "KITBAG_WEATHER_DECODE",
        }
    }
}

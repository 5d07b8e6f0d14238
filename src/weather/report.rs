//! Weather API response shapes
//!
//! Only the fields the summary needs are modeled: `name`,
//! `weather[0].{icon, description}`, `main.{temp, humidity}`,
//! `wind.speed`. Everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

use super::errors::{WeatherError, WeatherResult};

/// The documented slice of the API response
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub name: String,
    pub weather: Vec<WeatherCondition>,
    pub main: MainReadings,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub humidity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

/// The rendered report, with display-ready unit strings. The metric API
/// reports wind in m/s; the wind field labels the raw value `km/h`
/// without converting it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSummary {
    pub city: String,
    pub description: String,
    pub icon: String,
    pub temperature: String,
    pub humidity: String,
    pub wind: String,
}

impl WeatherResponse {
    /// Flatten into the display report. A response with an empty
    /// `weather` list is malformed.
    pub fn summarize(self) -> WeatherResult<WeatherSummary> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            WeatherError::Decode("response carried no weather conditions".to_string())
        })?;

        Ok(WeatherSummary {
            city: self.name,
            description: condition.description,
            icon: condition.icon,
            temperature: format!("{}°C", self.main.temp),
            humidity: format!("{}%", self.main.humidity),
            wind: format!("{}km/h", self.wind.speed),
        })
    }
}

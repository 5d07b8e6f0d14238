//! Weather API client
//!
//! One blocking GET per lookup: `<endpoint>?q=<city>&units=metric&appid=
//! <key>`. No retry, no explicit timeout, no caching. Units are always
//! metric.

use crate::observability::Logger;

use super::errors::{WeatherError, WeatherResult};
use super::report::{WeatherResponse, WeatherSummary};

pub struct WeatherClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> WeatherClient {
        WeatherClient {
            http: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Look up current weather for `city`.
    ///
    /// A non-2xx answer (unknown city, bad key) is `NoWeather`; transport
    /// failures and undecodable bodies are reported separately.
    pub fn fetch(&self, city: &str) -> WeatherResult<WeatherSummary> {
        Logger::trace("WEATHER_FETCH", &[("city", city)]);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city), ("units", "metric"), ("appid", &self.api_key)])
            .send()
            .map_err(|e| WeatherError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            Logger::warn(
                "WEATHER_NOT_FOUND",
                &[("city", city), ("status", status.as_str())],
            );
            return Err(WeatherError::NoWeather);
        }

        let payload: WeatherResponse = response
            .json()
            .map_err(|e| WeatherError::Decode(e.to_string()))?;
        payload.summarize()
    }
}

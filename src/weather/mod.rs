//! Weather lookup subsystem for kitbag
//!
//! A thin client over the third-party current-weather API: one GET per
//! lookup, the documented response slice decoded into a typed shape, and
//! a display summary with ready-to-print unit strings.

mod client;
mod errors;
mod report;

pub use client::WeatherClient;
pub use errors::{WeatherError, WeatherResult};
pub use report::{MainReadings, WeatherCondition, WeatherResponse, WeatherSummary, Wind};

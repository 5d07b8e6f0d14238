//! # Age Calculator
//!
//! Full years between a birth date and a reference date. The year
//! difference is decremented when the reference month/day falls before
//! the birthday, so the age only ticks over on the birthday itself.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Result type for age operations
pub type AgeResult<T> = Result<T, AgeError>;

/// Age calculation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgeError {
    /// Not a valid calendar date in `YYYY-MM-DD` form
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// The birth date lies after the reference date
    #[error("Birth date {born} is after {on}")]
    BirthInFuture { born: NaiveDate, on: NaiveDate },
}

impl AgeError {
    /// Stable error code string for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            AgeError::InvalidDate { .. } => "KITBAG_AGE_INVALID_DATE",
            AgeError::BirthInFuture { .. } => "KITBAG_AGE_FUTURE_BIRTH",
        }
    }
}

/// Computed age, rendered into the response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeReport {
    pub born: NaiveDate,
    pub on: NaiveDate,
    pub years: u32,
}

/// Parse a `YYYY-MM-DD` date, rejecting impossible calendar dates
pub fn parse_date(value: &str) -> AgeResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| AgeError::InvalidDate {
        value: value.to_string(),
    })
}

/// Full years lived from `born` to `on` inclusive of the birthday itself
pub fn age_in_years(born: NaiveDate, on: NaiveDate) -> AgeResult<u32> {
    if born > on {
        return Err(AgeError::BirthInFuture { born, on });
    }
    let mut years = on.year() - born.year();
    if (on.month(), on.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    Ok(years as u32)
}

/// Parse both dates and build the report
pub fn compute(born: &str, on: &str) -> AgeResult<AgeReport> {
    let born = parse_date(born)?;
    let on = parse_date(on)?;
    let years = age_in_years(born, on)?;
    Ok(AgeReport { born, on, years })
}

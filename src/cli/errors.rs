//! CLI-specific error types
//!
//! Every failure surfaces as one error envelope on stdout; the `code()`
//! string is the stable, script-matchable part. Subsystem errors pass
//! through transparently so the envelope carries their own codes.

use std::io;

use serde_json::{json, Value};
use thiserror::Error;

use crate::age::AgeError;
use crate::blog::BlogError;
use crate::calc::CalcError;
use crate::rps::RpsError;
use crate::weather::WeatherError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("{0}")]
    Config(String),

    /// I/O error (stdin/stdout)
    #[error("{0}")]
    Io(String),

    /// An argument clap accepted but the command cannot use
    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Blog(#[from] BlogError),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error(transparent)]
    Age(#[from] AgeError),

    #[error(transparent)]
    Rps(#[from] RpsError),
}

impl CliError {
    /// Config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// I/O error
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Invalid argument
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "KITBAG_CLI_CONFIG_ERROR",
            Self::Io(_) => "KITBAG_CLI_IO_ERROR",
            Self::InvalidArgument(_) => "KITBAG_CLI_INVALID_ARGUMENT",
            Self::Blog(e) => e.code(),
            Self::Weather(e) => e.code(),
            Self::Calc(e) => e.code(),
            Self::Age(e) => e.code(),
            Self::Rps(e) => e.code(),
        }
    }

    /// Structured payload for the envelope's `details` field, present
    /// for validation failures (the field-to-message map)
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::Blog(blog) => blog.field_errors().map(|fields| json!(fields)),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io(format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::{BlogOp, CreateOp, PostStore};

    #[test]
    fn test_subsystem_codes_pass_through() {
        let err = CliError::from(BlogError::NotFound { id: 9 });
        assert_eq!(err.code(), "KITBAG_BLOG_NOT_FOUND");

        let err = CliError::from(CalcError::DivisionByZero);
        assert_eq!(err.code(), "KITBAG_CALC_DIVIDE_BY_ZERO");

        let err = CliError::config("bad config");
        assert_eq!(err.code(), "KITBAG_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_validation_details_carry_the_field_map() {
        let dir = tempfile::TempDir::new().unwrap();
        let slot = crate::blog::DurableSlot::open(dir.path()).unwrap();
        let mut store = PostStore::load(slot);

        let err = crate::blog::dispatch(
            &mut store,
            BlogOp::Create(CreateOp {
                title: "x".to_string(),
                category: "Technology".to_string(),
                content: "long enough content".to_string(),
                image_url: None,
            }),
        )
        .unwrap_err();

        let cli_err = CliError::from(err);
        let details = cli_err.details().unwrap();
        assert_eq!(
            details["title"],
            json!("Title must be at least 3 characters")
        );
    }

    #[test]
    fn test_non_validation_errors_have_no_details() {
        assert!(CliError::io("broken pipe").details().is_none());
        assert!(CliError::from(CalcError::DivisionByZero).details().is_none());
    }
}

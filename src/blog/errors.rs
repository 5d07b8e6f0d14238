//! # Blog Errors
//!
//! Error types for the post store and its transfer paths.
//!
//! Failure handling rules:
//! - Validation blocks only the triggering operation; nothing mutates
//! - Storage write failures are reported, the in-memory state is kept
//! - Format failures abort an import and leave the store untouched

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type for blog operations
pub type BlogResult<T> = Result<T, BlogError>;

/// Post store and transfer errors
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    /// One or more draft fields failed validation
    #[error("Validation failed: {}", summarize_fields(fields))]
    Validation {
        /// Field name to human message, deterministically ordered
        fields: BTreeMap<String, String>,
    },

    /// No post carries the requested id
    #[error("Post {id} not found")]
    NotFound { id: i64 },

    /// The durable slot could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// An imported document does not match the transfer format. Carries
    /// the full user-facing message.
    #[error("{0}")]
    Format(String),
}

impl BlogError {
    /// Stable error code string for the response envelope
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::Validation { .. } => "KITBAG_BLOG_VALIDATION",
            BlogError::NotFound { .. } => "KITBAG_BLOG_NOT_FOUND",
            BlogError::Storage(_) => "KITBAG_BLOG_STORAGE",
            BlogError::Format(_) => "KITBAG_BLOG_FORMAT",
        }
    }

    /// Validation details, when present
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            BlogError::Validation { fields } => Some(fields),
            _ => None,
        }
    }
}

fn summarize_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, message)| format!("{}: {}", field, message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), "Title is required".to_string());

        assert_eq!(
            BlogError::Validation { fields }.code(),
            "KITBAG_BLOG_VALIDATION"
        );
        assert_eq!(BlogError::NotFound { id: 9 }.code(), "KITBAG_BLOG_NOT_FOUND");
        assert_eq!(
            BlogError::Storage("disk".to_string()).code(),
            "KITBAG_BLOG_STORAGE"
        );
        assert_eq!(
            BlogError::Format("Invalid file format".to_string()).code(),
            "KITBAG_BLOG_FORMAT"
        );
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("title".to_string(), "Title is required".to_string());
        fields.insert("content".to_string(), "Content is required".to_string());

        let message = BlogError::Validation { fields }.to_string();
        assert!(message.contains("title: Title is required"));
        assert!(message.contains("content: Content is required"));
    }

    #[test]
    fn test_not_found_names_the_id() {
        assert_eq!(
            BlogError::NotFound { id: 1705312200000 }.to_string(),
            "Post 1705312200000 not found"
        );
    }
}

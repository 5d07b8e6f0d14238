//! Draft validation
//!
//! Rules:
//! - Title: required, 3 to 100 characters
//! - Category: required, member of the fixed set
//! - Content: required, at least 10 characters
//! - Image URL: optional, must parse as a well-formed URL when present
//!
//! Validation collects every failure into a field-to-message map and never
//! mutates anything. Lengths are counted in characters, not bytes.

use std::collections::BTreeMap;

use url::Url;

use super::category::Category;
use super::post::PostDraft;

/// Field-keyed validation messages, deterministically ordered
pub type FieldErrors = BTreeMap<String, String>;

const TITLE_MIN_CHARS: usize = 3;
const TITLE_MAX_CHARS: usize = 100;
const CONTENT_MIN_CHARS: usize = 10;

/// Check every field of a draft, reporting all failures at once
pub fn validate_draft(draft: &PostDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    let title_chars = draft.title.chars().count();
    if draft.title.is_empty() {
        errors.insert("title".to_string(), "Title is required".to_string());
    } else if title_chars < TITLE_MIN_CHARS {
        errors.insert(
            "title".to_string(),
            "Title must be at least 3 characters".to_string(),
        );
    } else if title_chars > TITLE_MAX_CHARS {
        errors.insert(
            "title".to_string(),
            "Title must be less than 100 characters".to_string(),
        );
    }

    if draft.category.is_empty() {
        errors.insert("category".to_string(), "Category is required".to_string());
    } else if !Category::is_valid(&draft.category) {
        errors.insert(
            "category".to_string(),
            format!("Category must be one of: {}", category_names().join(", ")),
        );
    }

    let content_chars = draft.content.chars().count();
    if draft.content.is_empty() {
        errors.insert("content".to_string(), "Content is required".to_string());
    } else if content_chars < CONTENT_MIN_CHARS {
        errors.insert(
            "content".to_string(),
            "Content must be at least 10 characters".to_string(),
        );
    }

    if let Some(url) = &draft.image_url {
        if !url.is_empty() && Url::parse(url).is_err() {
            errors.insert(
                "imageUrl".to_string(),
                "Please enter a valid URL".to_string(),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn category_names() -> Vec<&'static str> {
    Category::ALL.iter().map(|c| c.as_str()).collect()
}

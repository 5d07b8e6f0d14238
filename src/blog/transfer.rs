//! Import / export
//!
//! The transfer document is `{"posts": [...], "exportDate": "...",
//! "version": "1.0"}`, pretty-printed. Import accepts any JSON document
//! with an array field `posts` whose members are post records;
//! `exportDate` and `version` are ignored on the way in. The whole
//! document is parsed and shape-checked before anything touches the
//! store, so a bad file leaves the store exactly as it was.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{BlogError, BlogResult};
use super::post::Post;

pub const TRANSFER_VERSION: &str = "1.0";

/// The export document, fields in the order the journal writes them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferDocument {
    pub posts: Vec<Post>,
    #[serde(rename = "exportDate")]
    pub export_date: DateTime<Utc>,
    pub version: String,
}

impl TransferDocument {
    pub fn new(posts: Vec<Post>, now: DateTime<Utc>) -> TransferDocument {
        TransferDocument {
            posts,
            export_date: now,
            version: TRANSFER_VERSION.to_string(),
        }
    }
}

/// Default export filename: `blog-posts-<YYYY-MM-DD>.json` (UTC date)
pub fn default_export_filename(now: DateTime<Utc>) -> String {
    format!("blog-posts-{}.json", now.format("%Y-%m-%d"))
}

/// Write the full post list as an export document, fsynced.
/// Returns the number of exported posts.
pub fn write_export(posts: &[Post], path: &Path, now: DateTime<Utc>) -> BlogResult<usize> {
    let document = TransferDocument::new(posts.to_vec(), now);
    let raw = serde_json::to_string_pretty(&document)
        .map_err(|e| BlogError::Storage(format!("Failed to serialize export: {}", e)))?;

    let mut file = File::create(path).map_err(|e| {
        BlogError::Storage(format!("Failed to create {}: {}", path.display(), e))
    })?;
    file.write_all(raw.as_bytes()).map_err(|e| {
        BlogError::Storage(format!("Failed to write {}: {}", path.display(), e))
    })?;
    file.sync_all().map_err(|e| {
        BlogError::Storage(format!("fsync failed for {}: {}", path.display(), e))
    })?;

    Ok(document.posts.len())
}

/// Read and shape-check an import file, returning its posts
pub fn read_import(path: &Path) -> BlogResult<Vec<Post>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        BlogError::Storage(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_import(&raw)
}

/// Shape-check an import document:
/// - it must be JSON
/// - it must carry an array field `posts`
/// - every member must be a post record
pub fn parse_import(raw: &str) -> BlogResult<Vec<Post>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| BlogError::Format(format!("Error reading file: {}", e)))?;

    let posts_value = match value.get("posts") {
        Some(posts) if posts.is_array() => posts.clone(),
        _ => return Err(BlogError::Format("Invalid file format".to_string())),
    };

    serde_json::from_value::<Vec<Post>>(posts_value)
        .map_err(|e| BlogError::Format(format!("Invalid file format: {}", e)))
}

//! Post entity and its input shapes
//!
//! Rules:
//! - `id` and `dateCreated` are assigned once and never change
//! - `readTime` is derived from content on every create and update
//! - Serialized field names match the journal's on-disk data
//!   (`imageUrl`, `readTime`, `dateCreated`, `dateModified`)
//! - `imageUrl` is written as `null` when absent; `dateModified` is
//!   omitted until the first update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Words per minute assumed by the reading-time estimate
const WORDS_PER_MINUTE: u32 = 200;

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Millisecond-timestamp id, unique within a store
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    /// Estimated reading time in whole minutes, at least 1
    #[serde(rename = "readTime")]
    pub read_time: u32,
    #[serde(rename = "dateCreated")]
    pub date_created: DateTime<Utc>,
    #[serde(rename = "dateModified", default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<DateTime<Utc>>,
}

/// Field values for a new post, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub title: String,
    pub category: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// A partial update. `None` leaves a field unchanged.
///
/// `image_url: Some("")` clears the image: an emptied URL field means
/// removal, not "keep the old one".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl Post {
    /// Build a post from a validated draft. `read_time` is derived here;
    /// `date_modified` starts absent.
    pub fn from_draft(id: i64, draft: PostDraft, now: DateTime<Utc>) -> Self {
        let image_url = draft.image_url.filter(|url| !url.is_empty());
        Post {
            id,
            read_time: read_time_minutes(&draft.content),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            image_url,
            date_created: now,
            date_modified: None,
        }
    }

    /// Overwrite the mutable fields from a validated merged draft.
    /// `id` and `date_created` are untouched; `date_modified` is stamped.
    pub fn update_from(&mut self, draft: PostDraft, now: DateTime<Utc>) {
        self.read_time = read_time_minutes(&draft.content);
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.image_url = draft.image_url.filter(|url| !url.is_empty());
        self.date_modified = Some(now);
    }
}

impl PostPatch {
    /// Resolve the patch against an existing post into the full set of
    /// would-be field values, for validation before anything mutates.
    pub fn merged_with(&self, post: &Post) -> PostDraft {
        PostDraft {
            title: self.title.clone().unwrap_or_else(|| post.title.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| post.category.clone()),
            content: self.content.clone().unwrap_or_else(|| post.content.clone()),
            image_url: match &self.image_url {
                None => post.image_url.clone(),
                Some(url) if url.is_empty() => None,
                Some(url) => Some(url.clone()),
            },
        }
    }
}

/// Reading time in minutes: `max(1, ceil(words / 200))` where words are
/// whitespace-separated tokens
pub fn read_time_minutes(content: &str) -> u32 {
    let words = content.split_whitespace().count() as u32;
    std::cmp::max(1, (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE)
}

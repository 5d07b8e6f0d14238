//! Blog operation model
//!
//! Every user action on the journal routes through one named operation
//! dispatched against the store, decoupled from any rendering. The
//! outcome carries everything a front end would show, including the
//! journal's notification message.
//!
//! String inputs are trimmed of surrounding whitespace here, before
//! validation sees them; confirmation prompts stay outside (a delete or
//! replace op is already confirmed).

use serde::{Deserialize, Serialize};

use crate::observability::Logger;

use super::errors::{BlogError, BlogResult};
use super::post::{Post, PostDraft, PostPatch};
use super::projection::{project, CategoryFilter, Query, SortKey};
use super::stats::{self, Statistics};
use super::store::PostStore;

/// All blog operations route through this enum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum BlogOp {
    Create(CreateOp),
    Update(UpdateOp),
    Delete { id: i64 },
    Show { id: i64 },
    List(ListOp),
    Stats,
    ReplaceAll(ReplaceAllOp),
}

impl BlogOp {
    /// Operation name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update(_) => "update",
            Self::Delete { .. } => "delete",
            Self::Show { .. } => "show",
            Self::List(_) => "list",
            Self::Stats => "stats",
            Self::ReplaceAll(_) => "replace_all",
        }
    }
}

/// Create a new post from form fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOp {
    pub title: String,
    pub category: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Patch an existing post. Absent fields stay as they are; an empty
/// `image_url` clears the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOp {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// List posts through the projection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOp {
    /// Category name, or the `all` sentinel (the default)
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<SortKey>,
}

/// Swap the whole list (the import path; no per-post validation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplaceAllOp {
    pub posts: Vec<Post>,
}

/// What a dispatched operation produced
#[derive(Debug, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum OpOutcome {
    Created { message: String, post: Post },
    Updated { message: String, post: Post },
    Deleted { message: String, id: i64, removed: bool },
    Shown { post: Post },
    Listed { heading: String, posts: Vec<Post> },
    Stats { stats: Statistics },
    Replaced { message: String, posts: usize },
}

/// Run one operation against the store
pub fn dispatch(store: &mut PostStore, op: BlogOp) -> BlogResult<OpOutcome> {
    Logger::trace("BLOG_OP", &[("op", op.name())]);

    match op {
        BlogOp::Create(create) => {
            let post = store.create(draft_from(create))?;
            Ok(OpOutcome::Created {
                message: "Post created successfully!".to_string(),
                post,
            })
        }
        BlogOp::Update(update) => {
            let id = update.id;
            let post = store.update(id, patch_from(update))?;
            Ok(OpOutcome::Updated {
                message: "Post updated successfully!".to_string(),
                post,
            })
        }
        BlogOp::Delete { id } => {
            let removed = store.delete(id)?;
            Ok(OpOutcome::Deleted {
                message: "Post deleted successfully!".to_string(),
                id,
                removed,
            })
        }
        BlogOp::Show { id } => store
            .find(id)
            .cloned()
            .map(|post| OpOutcome::Shown { post })
            .ok_or(BlogError::NotFound { id }),
        BlogOp::List(list) => {
            let query = Query::new(
                list.filter
                    .as_deref()
                    .map(CategoryFilter::parse)
                    .unwrap_or(CategoryFilter::All),
                list.search.as_deref().unwrap_or(""),
                list.sort.unwrap_or(SortKey::Newest),
            );
            let listing = project(store.posts(), &query);
            Ok(OpOutcome::Listed {
                heading: listing.heading,
                posts: listing.posts.into_iter().cloned().collect(),
            })
        }
        BlogOp::Stats => Ok(OpOutcome::Stats {
            stats: stats::compute(store.posts()),
        }),
        BlogOp::ReplaceAll(replace) => {
            let count = store.replace_all(replace.posts)?;
            Ok(OpOutcome::Replaced {
                message: format!("Successfully imported {} posts!", count),
                posts: count,
            })
        }
    }
}

fn draft_from(create: CreateOp) -> PostDraft {
    PostDraft {
        title: create.title.trim().to_string(),
        category: create.category,
        content: create.content.trim().to_string(),
        image_url: create.image_url.map(|url| url.trim().to_string()),
    }
}

fn patch_from(update: UpdateOp) -> PostPatch {
    PostPatch {
        title: update.title.map(|s| s.trim().to_string()),
        category: update.category,
        content: update.content.map(|s| s.trim().to_string()),
        image_url: update.image_url.map(|s| s.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::slot::DurableSlot;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> PostStore {
        PostStore::load(DurableSlot::open(dir.path()).unwrap())
    }

    fn create_op(title: &str) -> BlogOp {
        BlogOp::Create(CreateOp {
            title: title.to_string(),
            category: "Technology".to_string(),
            content: "Body text long enough to validate.".to_string(),
            image_url: None,
        })
    }

    #[test]
    fn test_op_parsing() {
        let json = r#"{"op": "create", "title": "Hello there", "category": "Travel", "content": "0123456789"}"#;
        let op: BlogOp = serde_json::from_str(json).unwrap();

        assert!(matches!(op, BlogOp::Create(_)));
        assert_eq!(op.name(), "create");
    }

    #[test]
    fn test_list_op_accepts_both_sort_spellings() {
        let kebab: BlogOp =
            serde_json::from_str(r#"{"op": "list", "sort": "read-time"}"#).unwrap();
        let journal: BlogOp =
            serde_json::from_str(r#"{"op": "list", "sort": "readTime"}"#).unwrap();

        for op in [kebab, journal] {
            if let BlogOp::List(list) = op {
                assert_eq!(list.sort, Some(SortKey::ReadTime));
            } else {
                panic!("Expected List operation");
            }
        }
    }

    #[test]
    fn test_dispatch_create_carries_the_notification() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let outcome = dispatch(&mut store, create_op("A dispatched post")).unwrap();
        match outcome {
            OpOutcome::Created { message, post } => {
                assert_eq!(message, "Post created successfully!");
                assert_eq!(post.title, "A dispatched post");
            }
            other => panic!("Expected Created, got {:?}", other),
        }
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_dispatch_trims_form_fields() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let op = BlogOp::Create(CreateOp {
            title: "  Padded title  ".to_string(),
            category: "Technology".to_string(),
            content: "  Body text long enough to validate.  ".to_string(),
            image_url: Some("   ".to_string()),
        });
        let outcome = dispatch(&mut store, op).unwrap();

        match outcome {
            OpOutcome::Created { post, .. } => {
                assert_eq!(post.title, "Padded title");
                assert_eq!(post.image_url, None);
            }
            other => panic!("Expected Created, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_show_missing_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let err = dispatch(&mut store, BlogOp::Show { id: 404 }).unwrap_err();
        assert!(matches!(err, BlogError::NotFound { id: 404 }));
    }

    #[test]
    fn test_dispatch_list_defaults() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let outcome = dispatch(&mut store, BlogOp::List(ListOp::default())).unwrap();
        match outcome {
            OpOutcome::Listed { heading, posts } => {
                assert_eq!(heading, "All Posts (3)");
                assert_eq!(posts.len(), 3);
            }
            other => panic!("Expected Listed, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_delete_reports_removed_flag() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        match dispatch(&mut store, BlogOp::Delete { id: 1 }).unwrap() {
            OpOutcome::Deleted { removed, .. } => assert!(removed),
            other => panic!("Expected Deleted, got {:?}", other),
        }
        match dispatch(&mut store, BlogOp::Delete { id: 1 }).unwrap() {
            OpOutcome::Deleted { removed, .. } => assert!(!removed),
            other => panic!("Expected Deleted, got {:?}", other),
        }
    }

    #[test]
    fn test_dispatch_replace_all_reports_the_import_count() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let posts = store.posts().to_vec();

        let outcome = dispatch(
            &mut store,
            BlogOp::ReplaceAll(ReplaceAllOp {
                posts: posts[..2].to_vec(),
            }),
        )
        .unwrap();

        match outcome {
            OpOutcome::Replaced { message, posts } => {
                assert_eq!(posts, 2);
                assert_eq!(message, "Successfully imported 2 posts!");
            }
            other => panic!("Expected Replaced, got {:?}", other),
        }
    }
}

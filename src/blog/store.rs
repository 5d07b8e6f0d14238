//! The post store
//!
//! An in-memory post list mirrored to the durable slot after every
//! mutation. Rules:
//!
//! - Loading never fails: an absent, unreadable, or unparseable slot value
//!   falls back to the built-in seed set, which is persisted immediately
//! - The newest post sits at the front (create prepends)
//! - Validation failures block the triggering operation and mutate nothing
//! - A failed slot write is reported as a storage error, but the in-memory
//!   change is kept; the next successful save persists it
//! - `replace_all` skips per-post validation (the import path)

use chrono::{DateTime, Utc};

use crate::observability::Logger;

use super::errors::{BlogError, BlogResult};
use super::post::{Post, PostDraft, PostPatch};
use super::seed::seed_posts;
use super::slot::{DurableSlot, POSTS_KEY};
use super::validate::validate_draft;

/// The durable post list
#[derive(Debug)]
pub struct PostStore {
    slot: DurableSlot,
    posts: Vec<Post>,
}

impl PostStore {
    /// Open the store over `slot`, recovering the saved list or seeding.
    ///
    /// Never returns an error: a corrupt or unreadable value is logged and
    /// replaced by the seed set. A failed seed persist is logged too; the
    /// store still works in memory.
    pub fn load(slot: DurableSlot) -> PostStore {
        let recovered = match slot.get(POSTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Post>>(&raw) {
                Ok(posts) => Some(posts),
                Err(e) => {
                    Logger::warn("BLOG_POSTS_UNPARSEABLE", &[("error", &e.to_string())]);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                Logger::warn("BLOG_POSTS_UNREADABLE", &[("error", &e.to_string())]);
                None
            }
        };

        match recovered {
            Some(posts) => PostStore { slot, posts },
            None => {
                let store = PostStore {
                    slot,
                    posts: seed_posts(),
                };
                Logger::info(
                    "BLOG_STORE_SEEDED",
                    &[("posts", &store.posts.len().to_string())],
                );
                if let Err(e) = store.save() {
                    Logger::error("BLOG_SEED_PERSIST_FAILED", &[("error", &e.to_string())]);
                }
                store
            }
        }
    }

    /// All posts, newest first
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Lookup for the detail view
    pub fn find(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Validate a draft, assign an id, prepend, persist.
    ///
    /// Returns the created post. A storage error after the prepend leaves
    /// the post in memory.
    pub fn create(&mut self, draft: PostDraft) -> BlogResult<Post> {
        validate_draft(&draft).map_err(|fields| BlogError::Validation { fields })?;

        let now = Utc::now();
        let post = Post::from_draft(self.next_id(now), draft, now);
        self.posts.insert(0, post.clone());
        Logger::info("POST_CREATED", &[("id", &post.id.to_string())]);

        self.save()?;
        Ok(post)
    }

    /// Merge a patch into the post with `id`, validate the merged values,
    /// recompute the reading time, stamp `date_modified`, persist.
    ///
    /// Existence is checked before validation, so a patch against a missing
    /// id reports NotFound even when the patch itself is invalid.
    pub fn update(&mut self, id: i64, patch: PostPatch) -> BlogResult<Post> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(BlogError::NotFound { id })?;

        let merged = patch.merged_with(&self.posts[index]);
        validate_draft(&merged).map_err(|fields| BlogError::Validation { fields })?;

        self.posts[index].update_from(merged, Utc::now());
        let post = self.posts[index].clone();
        Logger::info("POST_UPDATED", &[("id", &id.to_string())]);

        self.save()?;
        Ok(post)
    }

    /// Remove the post with `id`. An absent id is a silent no-op; the list
    /// is persisted either way. Returns whether a post was removed.
    pub fn delete(&mut self, id: i64) -> BlogResult<bool> {
        let before = self.posts.len();
        self.posts.retain(|p| p.id != id);
        let removed = self.posts.len() < before;
        if removed {
            Logger::info("POST_DELETED", &[("id", &id.to_string())]);
        }

        self.save()?;
        Ok(removed)
    }

    /// Swap the entire list in one step, with no per-post validation,
    /// then persist. Returns the new list length.
    pub fn replace_all(&mut self, posts: Vec<Post>) -> BlogResult<usize> {
        self.posts = posts;
        Logger::info(
            "POSTS_REPLACED",
            &[("posts", &self.posts.len().to_string())],
        );

        self.save()?;
        Ok(self.posts.len())
    }

    /// Serialize the full list and atomically overwrite the slot
    pub fn save(&self) -> BlogResult<()> {
        let raw = serde_json::to_string(&self.posts)
            .map_err(|e| BlogError::Storage(format!("Failed to serialize posts: {}", e)))?;
        self.slot.set(POSTS_KEY, &raw)
    }

    /// Next post id: the current millisecond timestamp, bumped past the
    /// largest existing id so two creates in the same millisecond (or a
    /// clock running behind the data) still yield unique ids.
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let max_existing = self.posts.iter().map(|p| p.id).max().unwrap_or(0);
        now.timestamp_millis().max(max_existing + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(dir: &TempDir) -> PostStore {
        PostStore::load(DurableSlot::open(dir.path()).unwrap())
    }

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            category: "Technology".to_string(),
            content: "Content long enough to pass validation.".to_string(),
            image_url: None,
        }
    }

    #[test]
    fn test_fresh_store_seeds_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);
        assert_eq!(store.len(), 3);

        // The seed was written through, so a reload sees the same list
        let reloaded = open_store(&dir);
        assert_eq!(reloaded.posts(), store.posts());
    }

    #[test]
    fn test_corrupt_slot_value_falls_back_to_seed() {
        let dir = TempDir::new().unwrap();
        let slot = DurableSlot::open(dir.path()).unwrap();
        slot.set(POSTS_KEY, "{not json").unwrap();

        let store = PostStore::load(slot);
        assert_eq!(store.len(), 3);
        assert_eq!(store.posts()[0].id, 1);
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let post = store.create(draft("A brand new post")).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(store.posts()[0].id, post.id);
        assert_eq!(post.read_time, 1);

        let reloaded = open_store(&dir);
        assert_eq!(reloaded.posts()[0].title, "A brand new post");
    }

    #[test]
    fn test_create_rejects_invalid_draft_without_mutating() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let bad = PostDraft {
            title: "ab".to_string(),
            category: "Sports".to_string(),
            content: "short".to_string(),
            image_url: None,
        };
        let err = store.create(bad).unwrap_err();

        let fields = err.field_errors().unwrap();
        assert_eq!(fields.len(), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_unique_within_a_millisecond() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        let first = store.create(draft("First of the pair")).unwrap();
        let second = store.create(draft("Second of the pair")).unwrap();
        assert!(second.id > first.id);
    }

    #[test]
    fn test_update_missing_id_is_not_found_before_validation() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        // The patch is invalid, but the id check comes first
        let patch = PostPatch {
            title: Some("x".to_string()),
            ..PostPatch::default()
        };
        let err = store.update(999, patch).unwrap_err();
        assert!(matches!(err, BlogError::NotFound { id: 999 }));
    }

    #[test]
    fn test_update_merges_validates_and_stamps() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let created = store.posts()[0].clone();

        let patch = PostPatch {
            content: Some("A fully rewritten body with plenty of words.".to_string()),
            ..PostPatch::default()
        };
        let updated = store.update(created.id, patch).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.date_created, created.date_created);
        assert_eq!(updated.title, created.title);
        assert!(updated.date_modified.is_some());
        assert!(updated.read_time >= 1);
    }

    #[test]
    fn test_update_rejects_invalid_merge_without_mutating() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let before = store.posts()[0].clone();

        let patch = PostPatch {
            title: Some("x".to_string()),
            ..PostPatch::default()
        };
        let err = store.update(before.id, patch).unwrap_err();
        assert!(matches!(err, BlogError::Validation { .. }));
        assert_eq!(store.posts()[0], before);
    }

    #[test]
    fn test_delete_removes_and_reports() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        assert!(store.delete(2).unwrap());
        assert_eq!(store.len(), 2);
        assert!(store.find(2).is_none());
    }

    #[test]
    fn test_delete_absent_id_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);
        let before: Vec<Post> = store.posts().to_vec();

        assert!(!store.delete(424242).unwrap());
        assert_eq!(store.posts(), before.as_slice());
    }

    #[test]
    fn test_replace_all_skips_validation() {
        let dir = TempDir::new().unwrap();
        let mut store = open_store(&dir);

        // A category outside the fixed set is fine on this path
        let mut odd = store.posts()[0].clone();
        odd.category = "Sports".to_string();
        let count = store.replace_all(vec![odd]).unwrap();

        assert_eq!(count, 1);
        assert_eq!(store.posts()[0].category, "Sports");

        let reloaded = open_store(&dir);
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_find_returns_the_matching_post() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.find(3).map(|p| p.id), Some(3));
        assert!(store.find(999).is_none());
    }
}

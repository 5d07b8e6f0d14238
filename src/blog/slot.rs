//! Durable key-value slot
//!
//! The journal's persistence primitive: named string values with
//! synchronous get/set, one file per key under `<data_dir>/slots/`.
//! Every set is an atomic full overwrite:
//!
//! 1. Write the value to a temp file in the slot directory
//! 2. fsync the temp file
//! 3. Rename over the target
//! 4. fsync the slot directory
//!
//! A reader never observes a torn value; after a crash the key holds
//! either the old value or the new one.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::errors::{BlogError, BlogResult};

/// Slot key holding the full post list as one JSON array
pub const POSTS_KEY: &str = "enhancedBlogPosts";

/// Slot key holding the theme preference
pub const THEME_KEY: &str = "enhancedBlogTheme";

/// One slot directory, keyed by name
#[derive(Debug)]
pub struct DurableSlot {
    dir: PathBuf,
}

impl DurableSlot {
    /// Open the slot directory under `data_dir`, creating it if needed
    pub fn open(data_dir: &Path) -> BlogResult<Self> {
        let dir = data_dir.join("slots");
        fs::create_dir_all(&dir).map_err(|e| {
            BlogError::Storage(format!(
                "Failed to create slot directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(DurableSlot { dir })
    }

    /// Read a key. An absent key is `Ok(None)`, not an error.
    pub fn get(&self, key: &str) -> BlogResult<Option<String>> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlogError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Atomically overwrite a key with `value`
    pub fn set(&self, key: &str, value: &str) -> BlogResult<()> {
        let temp = self.dir.join(format!("{}.tmp", key));

        let result = self.write_via_temp(key, value, &temp);
        if result.is_err() {
            // Best effort removal - we're already in an error path
            let _ = fs::remove_file(&temp);
        }
        result
    }

    fn write_via_temp(&self, key: &str, value: &str, temp: &Path) -> BlogResult<()> {
        let target = self.key_path(key);

        let mut file = File::create(temp).map_err(|e| {
            BlogError::Storage(format!("Failed to create {}: {}", temp.display(), e))
        })?;
        file.write_all(value.as_bytes()).map_err(|e| {
            BlogError::Storage(format!("Failed to write {}: {}", temp.display(), e))
        })?;

        // fsync is mandatory before the rename makes the value visible
        file.sync_all().map_err(|e| {
            BlogError::Storage(format!("fsync failed for {}: {}", temp.display(), e))
        })?;

        fs::rename(temp, &target).map_err(|e| {
            BlogError::Storage(format!(
                "Failed to rename {} to {}: {}",
                temp.display(),
                target.display(),
                e
            ))
        })?;

        fsync_dir(&self.dir)
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

/// fsync a directory so the rename itself is durable
fn fsync_dir(path: &Path) -> BlogResult<()> {
    let dir = OpenOptions::new().read(true).open(path).map_err(|e| {
        BlogError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    dir.sync_all().map_err(|e| {
        BlogError::Storage(format!(
            "fsync directory failed: {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_absent_key_is_none() {
        let dir = TempDir::new().unwrap();
        let slot = DurableSlot::open(dir.path()).unwrap();

        assert_eq!(slot.get(POSTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = TempDir::new().unwrap();
        let slot = DurableSlot::open(dir.path()).unwrap();

        slot.set(THEME_KEY, "dark").unwrap();
        assert_eq!(slot.get(THEME_KEY).unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_set_overwrites_fully() {
        let dir = TempDir::new().unwrap();
        let slot = DurableSlot::open(dir.path()).unwrap();

        slot.set(POSTS_KEY, "a much longer first value").unwrap();
        slot.set(POSTS_KEY, "[]").unwrap();

        // Full overwrite, no remnants of the longer value
        assert_eq!(slot.get(POSTS_KEY).unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_value_survives_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let slot = DurableSlot::open(dir.path()).unwrap();
            slot.set(POSTS_KEY, "[1,2,3]").unwrap();
        }

        let slot = DurableSlot::open(dir.path()).unwrap();
        assert_eq!(slot.get(POSTS_KEY).unwrap(), Some("[1,2,3]".to_string()));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let slot = DurableSlot::open(dir.path()).unwrap();

        slot.set(POSTS_KEY, "value").unwrap();

        let entries: Vec<String> = fs::read_dir(dir.path().join("slots"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(entries, vec![POSTS_KEY.to_string()]);
    }

    #[test]
    fn test_keys_are_independent() {
        let dir = TempDir::new().unwrap();
        let slot = DurableSlot::open(dir.path()).unwrap();

        slot.set(POSTS_KEY, "[]").unwrap();
        slot.set(THEME_KEY, "light").unwrap();

        assert_eq!(slot.get(POSTS_KEY).unwrap(), Some("[]".to_string()));
        assert_eq!(slot.get(THEME_KEY).unwrap(), Some("light".to_string()));
    }
}

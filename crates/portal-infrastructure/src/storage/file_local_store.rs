//! File-backed local storage.
//!
//! Keeps the key/value map as a JSON object in
//! `~/.config/portal/local_storage.json`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use portal_core::Result;
use portal_core::session::LocalStore;

use super::atomic_json::AtomicJsonFile;
use crate::paths::PortalPaths;

/// Local storage persisted to a JSON file.
///
/// Every write is a locked read-modify-write of the whole map, so two
/// processes sharing the file never lose each other's keys.
pub struct FileLocalStore {
    file: AtomicJsonFile<BTreeMap<String, String>>,
}

impl FileLocalStore {
    /// Creates a store at the default path.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(PortalPaths::local_storage_file()?))
    }

    /// Creates a store at a custom path (for testing and `--storage`).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}

impl LocalStore for FileLocalStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .file
            .load()?
            .and_then(|mut map| map.remove(key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        tracing::debug!(key, path = %self.path().display(), "local storage set");
        self.file.update(BTreeMap::new(), |map| {
            map.insert(key.to_string(), value.to_string());
            Ok(())
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        if !self.path().exists() {
            return Ok(());
        }
        tracing::debug!(key, path = %self.path().display(), "local storage remove");
        self.file.update(BTreeMap::new(), |map| {
            map.remove(key);
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::session::{TOKEN_KEY, USER_KEY};
    use tempfile::TempDir;

    #[test]
    fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");

        let store = FileLocalStore::with_path(path.clone());
        store.set_item(TOKEN_KEY, "abc").unwrap();
        store.set_item(USER_KEY, r#"{"id":1}"#).unwrap();
        drop(store);

        let reopened = FileLocalStore::with_path(path);
        assert_eq!(reopened.get_item(TOKEN_KEY).unwrap().as_deref(), Some("abc"));
        assert_eq!(
            reopened.get_item(USER_KEY).unwrap().as_deref(),
            Some(r#"{"id":1}"#)
        );
    }

    #[test]
    fn test_remove_keeps_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileLocalStore::with_path(temp_dir.path().join("local_storage.json"));
        store.set_item(TOKEN_KEY, "abc").unwrap();
        store.set_item(USER_KEY, "{}").unwrap();

        store.remove_item(TOKEN_KEY).unwrap();

        assert!(store.get_item(TOKEN_KEY).unwrap().is_none());
        assert!(store.get_item(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn test_remove_on_missing_file_does_not_create_it() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("local_storage.json");
        let store = FileLocalStore::with_path(path.clone());

        store.remove_item(TOKEN_KEY).unwrap();

        assert!(!path.exists());
        assert!(store.get_item(TOKEN_KEY).unwrap().is_none());
    }
}

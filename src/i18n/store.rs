//! Persistence for the selected language.
//!
//! The locale layer only needs a tiny key/value contract: read a value that
//! may be absent, and write one. Absence, unreadable files and malformed
//! contents are all treated as "no stored preference".

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, warn};

/// Key under which the active language code is stored.
pub const LANGUAGE_KEY: &str = "agri.language";

/// Key/value store backing locale persistence.
pub trait LocaleStore {
    /// Read a value; `None` when nothing has been stored.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-process store; contents are lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryLocaleStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryLocaleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocaleStore for MemoryLocaleStore {
    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.lock().ok()?;
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| anyhow::anyhow!("Locale store lock poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a JSON object on disk (`{"agri.language": "hi"}`).
#[derive(Debug, Clone)]
pub struct FileLocaleStore {
    path: PathBuf,
}

impl FileLocaleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                debug!("No locale store at {}: {}", self.path.display(), e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(
                "Ignoring malformed locale store at {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        })
    }
}

impl LocaleStore for FileLocaleStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create locale store directory {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write locale store {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // ==================== MemoryLocaleStore Tests ====================

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryLocaleStore::new();
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn test_memory_store_set_then_get() {
        let store = MemoryLocaleStore::new();
        store.set(LANGUAGE_KEY, "hi").expect("set");
        assert_eq!(store.get(LANGUAGE_KEY), Some("hi".to_string()));

        store.set(LANGUAGE_KEY, "ta").expect("set");
        assert_eq!(store.get(LANGUAGE_KEY), Some("ta".to_string()));
    }

    // ==================== FileLocaleStore Tests ====================

    #[test]
    fn test_file_store_missing_file_is_absent() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileLocaleStore::new(dir.path().join("locale.json"));
        assert_eq!(store.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("locale.json");

        FileLocaleStore::new(&path)
            .set(LANGUAGE_KEY, "mr")
            .expect("set");

        let reopened = FileLocaleStore::new(&path);
        assert_eq!(reopened.get(LANGUAGE_KEY), Some("mr".to_string()));
    }

    #[test]
    fn test_file_store_keeps_other_keys() {
        let dir = TempDir::new().expect("temp dir");
        let store = FileLocaleStore::new(dir.path().join("locale.json"));

        store.set("theme", "dark").expect("set");
        store.set(LANGUAGE_KEY, "gu").expect("set");

        assert_eq!(store.get("theme"), Some("dark".to_string()));
        assert_eq!(store.get(LANGUAGE_KEY), Some("gu".to_string()));
    }

    #[test]
    fn test_file_store_malformed_file_is_absent() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("locale.json");
        fs::write(&path, "{ not json").expect("write");

        let store = FileLocaleStore::new(&path);
        assert_eq!(store.get(LANGUAGE_KEY), None);

        store.set(LANGUAGE_KEY, "bn").expect("set overwrites garbage");
        assert_eq!(store.get(LANGUAGE_KEY), Some("bn".to_string()));
    }

    #[test]
    fn test_file_store_write_failure_is_error() {
        let dir = TempDir::new().expect("temp dir");
        // A directory where the file should be makes the write fail
        let path = dir.path().join("locale.json");
        fs::create_dir(&path).expect("mkdir");

        let store = FileLocaleStore::new(&path);
        assert!(store.set(LANGUAGE_KEY, "hi").is_err());
    }
}

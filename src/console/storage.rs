//! Durable key-value storage for console history.
//!
//! The console talks to storage only through [`KeyValueStore`], so every
//! failure arrives as a [`StorageError`] at this boundary and the console
//! decides how to degrade (fall back to the banner, skip the write).

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use super::history::HISTORY_LIMIT;

/// Fixed key the console history lives under.
pub const HISTORY_KEY: &str = "folio.console.history";

/// Errors raised by storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Value stored under '{key}' is not a JSON array of strings: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A string-keyed, string-valued durable store.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File backing a key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        let write_err = |source| StorageError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;

        // Write-then-rename so readers never see a partial value
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Write { path, source }),
        }
    }
}

/// In-memory store. Clones share the same map, like tabs sharing local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

/// Load persisted history.
///
/// `Ok(None)` when nothing was stored, [`StorageError::Malformed`] when the
/// value is not a JSON array of strings. The result is capped at
/// [`HISTORY_LIMIT`] lines, keeping the most recent.
pub fn load_history(store: &dyn KeyValueStore) -> Result<Option<Vec<String>>, StorageError> {
    let Some(raw) = store.get(HISTORY_KEY)? else {
        return Ok(None);
    };

    let mut lines: Vec<String> =
        serde_json::from_str(&raw).map_err(|source| StorageError::Malformed {
            key: HISTORY_KEY.to_string(),
            source,
        })?;

    let excess = lines.len().saturating_sub(HISTORY_LIMIT);
    lines.drain(..excess);
    Ok(Some(lines))
}

/// Persist the most recent [`HISTORY_LIMIT`] lines as a JSON array.
pub fn save_history(store: &mut dyn KeyValueStore, lines: &[String]) -> Result<(), StorageError> {
    let start = lines.len().saturating_sub(HISTORY_LIMIT);
    let json = serde_json::to_string(&lines[start..]).map_err(|source| StorageError::Encode {
        key: HISTORY_KEY.to_string(),
        source,
    })?;
    store.set(HISTORY_KEY, &json)
}

/// Delete persisted history.
pub fn clear_history(store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
    store.remove(HISTORY_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn memory_store_clones_share_values() {
        let mut store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn file_store_round_trips_and_removes() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "[\"a\"]").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("[\"a\"]".to_string()));
        assert!(store.path_for("k").exists());

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // Removing again is fine
        store.remove("k").unwrap();
    }

    #[test]
    fn file_store_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set(HISTORY_KEY, "[]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec![format!("{}.json", HISTORY_KEY)]);
    }

    #[test]
    fn load_history_absent_is_none() {
        let store = MemoryStore::new();
        assert!(load_history(&store).unwrap().is_none());
    }

    #[test]
    fn history_round_trips_through_store() {
        let mut store = MemoryStore::new();
        let saved = lines(&["$ ayuda", "Comandos", ""]);
        save_history(&mut store, &saved).unwrap();
        assert_eq!(load_history(&store).unwrap(), Some(saved));
    }

    #[test]
    fn save_history_keeps_most_recent_lines() {
        let mut store = MemoryStore::new();
        let many: Vec<String> = (0..HISTORY_LIMIT + 10).map(|i| i.to_string()).collect();
        save_history(&mut store, &many).unwrap();

        let loaded = load_history(&store).unwrap().unwrap();
        assert_eq!(loaded.len(), HISTORY_LIMIT);
        assert_eq!(loaded[0], "10");
    }

    #[test]
    fn load_history_caps_oversized_values() {
        let mut store = MemoryStore::new();
        let many: Vec<String> = (0..300).map(|i| i.to_string()).collect();
        store
            .set(HISTORY_KEY, &serde_json::to_string(&many).unwrap())
            .unwrap();

        let loaded = load_history(&store).unwrap().unwrap();
        assert_eq!(loaded.len(), HISTORY_LIMIT);
        assert_eq!(loaded.last().map(String::as_str), Some("299"));
    }

    #[test]
    fn malformed_values_are_errors() {
        for raw in ["not json", "{\"a\":1}", "[1, 2]", "[\"ok\", null]", "\"str\""] {
            let mut store = MemoryStore::new();
            store.set(HISTORY_KEY, raw).unwrap();
            let err = load_history(&store).unwrap_err();
            assert!(matches!(err, StorageError::Malformed { .. }), "{raw}");
        }
    }

    #[test]
    fn clear_history_removes_key() {
        let mut store = MemoryStore::new();
        save_history(&mut store, &lines(&["a"])).unwrap();
        clear_history(&mut store).unwrap();
        assert!(load_history(&store).unwrap().is_none());
    }
}

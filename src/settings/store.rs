//! Settings store trait and built-in backends

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use crate::{EventError, Result};

/// Trait for persisted string key-value stores
///
/// Backends abstract over wherever the host keeps small persisted values
/// (a settings file, platform preferences, a test map). The trait is
/// designed for simplicity - three methods cover all needs.
///
/// Backend failures are returned as-is; the adapters layered on top never
/// catch or translate them.
pub trait SettingsStore {
    /// Read the value stored under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and previews
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

/// File-backed store persisting a flat YAML map
///
/// The whole map is loaded on open and rewritten on every mutation. That is
/// proportionate here: the map holds a handful of short preference strings
/// written only on explicit user selection.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a settings file, creating an empty store when the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if its
    /// contents are not a YAML string map.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => {
                serde_yaml_ng::from_str(&contents).map_err(|e| EventError::Parse {
                    context: format!("settings file {}", path.display()),
                    details: e.to_string(),
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(EventError::file_error(path, e)),
        };

        debug!(path = %path.display(), entries = values.len(), "opened settings file");
        Ok(Self { path, values })
    }

    fn save(&self) -> Result<()> {
        let contents = serde_yaml_ng::to_string(&self.values).map_err(|e| EventError::Parse {
            context: format!("settings file {}", self.path.display()),
            details: e.to_string(),
        })?;
        std::fs::write(&self.path, contents)
            .map_err(|e| EventError::file_error(self.path.clone(), e))?;
        trace!(path = %self.path.display(), entries = self.values.len(), "settings file written");
        Ok(())
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.save()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let unique = format!(
            "flightline-{}-{}-{name}.yaml",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        );
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        // Removing again is a no-op
        store.remove("k").unwrap();
    }

    #[test]
    fn file_store_starts_empty_when_file_is_missing() {
        let path = temp_path("missing");
        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let path = temp_path("reopen");

        let mut store = FileStore::open(&path).unwrap();
        store.set("favoriteClubId", "club-A").unwrap();
        store.set("homeClubId", "club-B").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("favoriteClubId").unwrap().as_deref(), Some("club-A"));
        assert_eq!(reopened.get("homeClubId").unwrap().as_deref(), Some("club-B"));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn file_store_rejects_non_map_contents() {
        let path = temp_path("garbage");
        std::fs::write(&path, "- just\n- a\n- list\n").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, EventError::Parse { .. }));

        std::fs::remove_file(&path).unwrap();
    }
}

#![forbid(unsafe_code)]

//! Key-value preference storage.
//!
//! The page persists exactly one preference (the theme). The store trait is
//! string-to-string to match the host's local-storage shape; failures are
//! expected to be logged and degraded, never fatal.

use core::fmt;
use std::collections::HashMap;

/// A store operation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError(pub String);

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "preference store error: {}", self.0)
    }
}

impl std::error::Error for StoreError {}

/// Durable string key-value storage.
pub trait PreferenceStore {
    /// Read a key. `Ok(None)` means the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a key.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store; the default when persistence is not compiled in.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// JSON-file-backed store.
///
/// The whole map is rewritten on every `set`; with a single theme key that
/// is one small file write per toggle.
#[cfg(feature = "theme-persistence")]
pub use file_store::FileStore;

#[cfg(feature = "theme-persistence")]
mod file_store {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::{PreferenceStore, StoreError};

    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        values: HashMap<String, String>,
    }

    impl FileStore {
        /// Open (or create on first write) the store at `path`. A missing
        /// file is an empty store; a corrupt file is treated the same, with
        /// a warning, so a bad write can never brick the page.
        pub fn open(path: impl Into<PathBuf>) -> Self {
            let path = path.into();
            let values = match std::fs::read_to_string(&path) {
                Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                    tracing::warn!(path = %path.display(), %err, "corrupt preference file; starting empty");
                    HashMap::new()
                }),
                Err(_) => HashMap::new(),
            };
            Self { path, values }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.values.get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.values.insert(key.to_owned(), value.to_owned());
            let raw = serde_json::to_string(&self.values)
                .map_err(|err| StoreError(err.to_string()))?;
            std::fs::write(&self.path, raw).map_err(|err| StoreError(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("theme"), Ok(None));
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme"), Ok(Some("dark".into())));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme"), Ok(Some("light".into())));
    }

    #[cfg(feature = "theme-persistence")]
    mod persistence {
        use super::super::*;

        #[test]
        fn file_round_trip() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("prefs.json");

            let mut store = FileStore::open(&path);
            store.set("theme", "dark").unwrap();

            let reopened = FileStore::open(&path);
            assert_eq!(reopened.get("theme"), Ok(Some("dark".into())));
        }

        #[test]
        fn corrupt_file_starts_empty() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("prefs.json");
            std::fs::write(&path, "{not json").unwrap();

            let store = FileStore::open(&path);
            assert_eq!(store.get("theme"), Ok(None));
        }
    }
}

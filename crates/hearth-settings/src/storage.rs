//! Persistent key-value slots backing the settings store.
//!
//! # Design
//! - The port mirrors `localStorage`: string keys mapping to string values.
//! - Adapters report failures; the store decides whether to fall back.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::SettingsConfig;
use crate::error::{StorageError, StorageResult};

/// String key-value storage holding serialized settings.
pub trait SettingsStorage {
    /// Read the value stored under `key`, or `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// In-process storage; clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one slot.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::default();
        if let Ok(mut slots) = storage.slots.lock() {
            slots.insert(key.into(), value.into());
        }
        storage
    }

    fn poisoned(key: &str) -> StorageError {
        StorageError::Read {
            key: key.to_string(),
            detail: "memory storage lock poisoned".to_string(),
        }
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut slots = self.slots.lock().map_err(|_| Self::poisoned(key))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed storage keeping each slot in `<dir>/<key>.json`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`; the directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the configured state directory, if one is set.
    #[must_use]
    pub fn from_config(config: &SettingsConfig) -> Option<Self> {
        config.state_dir.as_deref().map(Self::new)
    }

    /// Path of the file backing `key`.
    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl SettingsStorage for FileStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(&path, err)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        fs::create_dir_all(&self.dir).map_err(|err| Self::io_error(&self.dir, err))?;
        let path = self.slot_path(key);
        let staging = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, value).map_err(|err| Self::io_error(&staging, err))?;
        fs::rename(&staging, &path).map_err(|err| Self::io_error(&path, err))
    }
}

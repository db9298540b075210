//! Synchronous string-keyed persistence.
//!
//! The favorites store treats its backend as a simple get/set/remove map.
//! [`MemoryStore`] keeps values for the lifetime of the process, [`FileStore`]
//! writes one file per key under a data directory. File writes go through a
//! temporary file in the same directory that is renamed into place, so an
//! interrupted write never leaves a truncated value behind.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::{debug, error};

use crate::errors::Error;

#[cfg(test)]
#[path = "storage_tests.rs"]
mod tests;

/// Name of the directory created under the platform data directory.
pub const DEFAULT_DATA_DIR_NAME: &str = "github-profile-finder";

/// A synchronous key-value backend.
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Error>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), Error>;
}

/// In-memory backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store writing `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the default data directory for the current platform.
    ///
    /// Falls back to a directory relative to the working directory when the
    /// platform does not define a data directory.
    pub fn default_root() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DATA_DIR_NAME)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, Error> {
        validate_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = ?path, "No stored value");
                Ok(None)
            }
            Err(e) => {
                error!(path = ?path, error = %e, "Failed to read stored value");
                Err(Error::storage(key, e))
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.root).map_err(|e| {
            error!(path = ?self.root, error = %e, "Failed to create data directory");
            Error::storage(key, e)
        })?;

        let mut staged = NamedTempFile::new_in(&self.root).map_err(|e| {
            error!(path = ?self.root, error = %e, "Failed to create temporary file");
            Error::storage(key, e)
        })?;
        if let Err(e) = staged.write_all(value.as_bytes()) {
            error!(path = ?staged.path(), error = %e, "Failed to write stored value");
            return Err(Error::storage(key, e));
        }
        staged.persist(&path).map_err(|e| {
            error!(path = ?path, error = %e.error, "Failed to move stored value into place");
            Error::storage(key, e.error)
        })?;

        debug!(path = ?path, bytes = value.len(), "Stored value");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), Error> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                error!(path = ?path, error = %e, "Failed to remove stored value");
                Err(Error::storage(key, e))
            }
        }
    }
}

// Keys become file names, so anything that could escape the root is refused.
fn validate_key(key: &str) -> Result<(), Error> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidStorageKey(key.to_string()))
    }
}

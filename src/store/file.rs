//! File-backed store backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

use super::KeyValueStore;

/// A store that keeps one JSON file per key beneath a data directory.
///
/// The value for key `k` lives at `<dir>/k.json`. Reads and writes are
/// synchronous; a missing file reads as an absent key. The directory is
/// created on first write.
///
/// # Example
///
/// ```no_run
/// use backoffice_core::store::{JsonFileStore, KeyValueStore};
///
/// let mut store = JsonFileStore::new("./data");
/// store.set("app_settings", "{}")?;
/// # Ok::<(), backoffice_core::error::CoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`. The directory need not exist yet.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory this store writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::StoreRead {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> CoreResult<()> {
        fs::create_dir_all(&self.dir).map_err(|e| CoreError::StoreWrite {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        fs::write(self.path_for(key), value).map_err(|e| CoreError::StoreWrite {
            key: key.to_string(),
            message: e.to_string(),
        })
    }
}

//! JSON file backed key-value storage.
//!
//! All keys of one store live in a single JSON object on disk:
//!
//! ```json
//! {
//!   "dynamicQuotes": "[{\"text\":\"...\",\"category\":\"...\"}]",
//!   "selectedCategoryFilter": "all"
//! }
//! ```
//!
//! The file is read once when the store is opened and rewritten in full on
//! every change. Writes go to a sibling temp file first and are renamed
//! into place, so a crash never leaves a half-written store behind.

use quotebox_application::{KeyValueStorage, StorageError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

type Values = BTreeMap<String, String>;

#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
    values: Mutex<Values>,
}

impl JsonFileStorage {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. An unreadable or corrupt file is
    /// logged and also treated as empty; it is overwritten on the next
    /// write.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = Self::read_values(&path);
        debug!("Opened {} with {} keys", path.display(), values.len());
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Get the path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_values(path: &Path) -> Values {
        if !path.exists() {
            return Values::new();
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Could not read storage file {}: {}", path.display(), e);
                return Values::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(values) => values,
            Err(e) => {
                warn!("Ignoring corrupt storage file {}: {}", path.display(), e);
                Values::new()
            }
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Values>, StorageError> {
        self.values
            .lock()
            .map_err(|_| StorageError::Unavailable("file storage lock poisoned".to_string()))
    }

    fn write_values(&self, values: &Values) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.lock()?;
        values.insert(key.to_string(), value.to_string());
        self.write_values(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.lock()?;
        if values.remove(key).is_some() {
            self.write_values(&values)?;
        }
        Ok(())
    }
}

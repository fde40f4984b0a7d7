//! Persistent key-value store collaborator.
//!
//! Whole serialized records are read and written per logical key with
//! last-write-wins semantics; no transactions. [`MemoryStore`] backs tests
//! and ephemeral use, [`FileStore`] keeps one file per key under a data
//! directory.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config;
use crate::error::Result;

// ---------------------------------------------------------------------------
// KeyValueStore
// ---------------------------------------------------------------------------

pub trait KeyValueStore {
    /// Read the record under `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write (or overwrite) the record under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the record under `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileStore
// ---------------------------------------------------------------------------

/// One JSON file per key under a data directory.
///
/// Writes go to a temp file first and are renamed into place, so an
/// interrupted write never leaves a corrupt record behind.
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `data_dir`, or at the platform-appropriate
    /// default when `None`. Creates the directory if it does not exist.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(FileStore { data_dir: dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are logical names; anything unsafe for a filename is folded
        // to an underscore.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.data_dir.join(format!("{}.json", safe))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let result = (|| -> Result<()> {
            fs::write(&tmp, value)?;
            fs::rename(&tmp, &path)?;
            Ok(())
        })();
        if result.is_err() {
            // Clean up partial temp file on any error
            let _ = fs::remove_file(&tmp);
        }
        result
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

//! cache::file_store
//!
//! JSON-file preference storage.
//!
//! The whole map is rewritten on every `set`: write to a temp file in the
//! same directory, sync, then rename over the target. A crash mid-write
//! leaves at most the previous version on disk.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::traits::{CacheError, CacheKey, CacheValue, PreferenceStore};
use crate::ui::output::{self, Verbosity};

/// File-backed preference store.
///
/// The file holds a single JSON object. It is created lazily on the first
/// `set`. Keys this crate does not know about are kept on rewrite.
#[derive(Debug)]
pub struct FilePreferenceStore {
    /// Path to the cache file
    path: PathBuf,
    /// Verbosity for recovery warnings
    verbosity: Verbosity,
}

impl FilePreferenceStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set the verbosity used for recovery warnings.
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Get the path to the cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw map from disk.
    fn read_map(&self) -> Result<Map<String, Value>, CacheError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| CacheError::ReadError(format!("{}: {}", self.path.display(), e)))?;

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(CacheError::ParseError(format!(
                "{}: expected a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(CacheError::ParseError(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    /// Read the map, treating any failure as an empty store.
    fn load_or_empty(&self) -> Map<String, Value> {
        match self.read_map() {
            Ok(map) => map,
            Err(e) => {
                output::warn(format!("{}; starting from an empty cache", e), self.verbosity);
                Map::new()
            }
        }
    }

    /// Write the map atomically with stable indented formatting.
    fn write_map(&self, map: &Map<String, Value>) -> Result<(), CacheError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    CacheError::WriteError(format!("cannot create directory: {}", e))
                })?;
            }
        }

        let content = serde_json::to_string_pretty(map)
            .map_err(|e| CacheError::WriteError(format!("cannot serialize cache: {}", e)))?;

        let temp_path = self.path.with_extension("json.tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| CacheError::WriteError(format!("cannot create temp file: {}", e)))?;

            file.write_all(content.as_bytes())
                .map_err(|e| CacheError::WriteError(format!("cannot write cache: {}", e)))?;

            file.sync_all()
                .map_err(|e| CacheError::WriteError(format!("cannot sync to disk: {}", e)))?;
        }

        fs::rename(&temp_path, &self.path)
            .map_err(|e| CacheError::WriteError(format!("cannot rename temp file: {}", e)))?;

        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: CacheKey) -> Option<CacheValue> {
        let map = self.load_or_empty();
        let value = map.get(key.as_str())?;
        serde_json::from_value(value.clone()).ok()
    }

    fn set(&self, key: CacheKey, value: CacheValue) -> Result<(), CacheError> {
        let mut map = self.load_or_empty();
        let value = serde_json::to_value(&value)
            .map_err(|e| CacheError::WriteError(format!("cannot serialize value: {}", e)))?;
        map.insert(key.as_str().to_string(), value);
        self.write_map(&map)
    }
}

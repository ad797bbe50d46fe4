//! cache::traits
//!
//! Preference store trait and value types.
//!
//! # Design
//!
//! The preference cache is a flat key/value map. Values are either a list
//! index (for choices whose label text may change between versions) or a
//! plain string. Readers never fail: a missing or unreadable store simply
//! has no value for any key.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from preference store writes.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to read the backing file.
    #[error("failed to read preference cache: {0}")]
    ReadError(String),

    /// The backing file is not a JSON object.
    #[error("preference cache is not valid JSON: {0}")]
    ParseError(String),

    /// Failed to write the backing file.
    #[error("failed to write preference cache: {0}")]
    WriteError(String),
}

/// Keys stored in the preference cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Index of the last selected commit type.
    CommitType,
    /// Name of the last selected remote.
    Remote,
    /// Last commit message.
    CommitMsg,
    /// Index of the last lint choice.
    Lint,
}

impl CacheKey {
    /// Name of the key in the persisted file.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::CommitType => "commitType",
            CacheKey::Remote => "remote",
            CacheKey::CommitMsg => "commitMsg",
            CacheKey::Lint => "lint",
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scalar preference value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CacheValue {
    /// Position in a fixed list.
    Index(usize),
    /// Free text.
    Text(String),
}

impl CacheValue {
    /// The index, if this is an index value.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            CacheValue::Index(i) => Some(*i),
            CacheValue::Text(_) => None,
        }
    }

    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CacheValue::Index(_) => None,
            CacheValue::Text(s) => Some(s),
        }
    }
}

impl From<usize> for CacheValue {
    fn from(index: usize) -> Self {
        CacheValue::Index(index)
    }
}

impl From<&str> for CacheValue {
    fn from(text: &str) -> Self {
        CacheValue::Text(text.to_string())
    }
}

impl From<String> for CacheValue {
    fn from(text: String) -> Self {
        CacheValue::Text(text)
    }
}

/// Persisted preference storage.
///
/// `get` never fails; `set` replaces the value for one key and leaves all
/// other keys untouched.
pub trait PreferenceStore {
    /// Get the value for a key, or `None` if unset or unreadable.
    fn get(&self, key: CacheKey) -> Option<CacheValue>;

    /// Set the value for a key.
    fn set(&self, key: CacheKey, value: CacheValue) -> Result<(), CacheError>;

    /// Get an index value. Text values read as `None`.
    fn get_index(&self, key: CacheKey) -> Option<usize> {
        self.get(key).and_then(|v| v.as_index())
    }

    /// Get a text value. Index values read as `None`.
    fn get_text(&self, key: CacheKey) -> Option<String> {
        self.get(key).and_then(|v| v.as_text().map(String::from))
    }
}

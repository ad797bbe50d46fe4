//! cache::memory
//!
//! In-memory preference store for tests and dry sessions.

use std::cell::RefCell;
use std::collections::HashMap;

use super::traits::{CacheError, CacheKey, CacheValue, PreferenceStore};

/// Preference store that lives only as long as the value.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RefCell<HashMap<CacheKey, CacheValue>>,
    writes: RefCell<usize>,
}

impl MemoryPreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with values.
    pub fn with_values(values: impl IntoIterator<Item = (CacheKey, CacheValue)>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().extend(values);
        store
    }

    /// Number of `set` calls so far.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: CacheKey) -> Option<CacheValue> {
        self.values.borrow().get(&key).cloned()
    }

    fn set(&self, key: CacheKey, value: CacheValue) -> Result<(), CacheError> {
        self.values.borrow_mut().insert(key, value);
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

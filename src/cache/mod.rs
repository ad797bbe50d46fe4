//! cache
//!
//! Preference cache used to prefill prompt defaults across sessions.
//!
//! # Architecture
//!
//! Preferences go through the [`PreferenceStore`] trait, which has two
//! implementations:
//!
//! - [`FilePreferenceStore`]: a JSON object in the work tree (default)
//! - [`MemoryPreferenceStore`]: process-local, used by tests
//!
//! The store is an explicit object handed to each stage; nothing reads the
//! cache file behind the session's back.
//!
//! # Example
//!
//! ```no_run
//! use commitpilot::cache::{CacheKey, FilePreferenceStore, PreferenceStore};
//! use std::path::PathBuf;
//!
//! let store = FilePreferenceStore::new(PathBuf::from(".commitpilot-cache.json"));
//! store.set(CacheKey::Remote, "upstream".into()).unwrap();
//! assert_eq!(store.get_text(CacheKey::Remote).as_deref(), Some("upstream"));
//! ```

mod file_store;
mod memory;
mod traits;

pub use file_store::FilePreferenceStore;
pub use memory::MemoryPreferenceStore;
pub use traits::{CacheError, CacheKey, CacheValue, PreferenceStore};

/// File name of the preference cache inside the work tree.
pub const CACHE_FILE_NAME: &str = ".commitpilot-cache.json";

//! core::paths
//!
//! Centralized path routing for commitpilot storage locations.
//!
//! # Storage Layout
//!
//! - `<work_dir>/.commitpilot-cache.json` - Preference cache
//! - `<work_dir>/.gitignore` - Ignore file that must exclude the cache
//! - `<common_dir>/config` - Repository configuration (remotes)
//! - `<common_dir>/commitpilot/config.toml` - Repo-scoped configuration
//!
//! Repository configuration lives in `common_dir`, which differs from
//! `git_dir` for linked worktrees.
//!
//! # Example
//!
//! ```
//! use commitpilot::core::paths::SessionPaths;
//! use std::path::PathBuf;
//!
//! let paths = SessionPaths::new(PathBuf::from("/repo"), PathBuf::from("/repo/.git"));
//!
//! assert_eq!(paths.git_config_path(), PathBuf::from("/repo/.git/config"));
//! assert_eq!(
//!     paths.cache_path(),
//!     PathBuf::from("/repo/.commitpilot-cache.json")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::cache::CACHE_FILE_NAME;
use crate::git::RepoInfo;

/// Locations used by a commit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    /// Root of the working tree.
    pub work_dir: PathBuf,
    /// Shared git directory (holds `config`).
    pub common_dir: PathBuf,
}

impl SessionPaths {
    pub fn new(work_dir: PathBuf, common_dir: PathBuf) -> Self {
        Self {
            work_dir,
            common_dir,
        }
    }

    /// Build paths from a discovered repository.
    pub fn from_repo_info(info: &RepoInfo) -> Self {
        Self {
            work_dir: info.work_dir.clone(),
            common_dir: info.common_dir.clone(),
        }
    }

    /// Path to the preference cache file.
    pub fn cache_path(&self) -> PathBuf {
        self.work_dir.join(CACHE_FILE_NAME)
    }

    /// Path to the ignore file that must exclude the cache.
    pub fn ignore_path(&self) -> PathBuf {
        self.work_dir.join(".gitignore")
    }

    /// Ignore pattern for the cache, anchored at the work tree root.
    pub fn ignore_pattern(&self) -> String {
        format!("/{}", CACHE_FILE_NAME)
    }

    /// Path to the repository configuration file.
    pub fn git_config_path(&self) -> PathBuf {
        self.common_dir.join("config")
    }

    /// Path to the repo-scoped commitpilot configuration.
    pub fn repo_config_path(&self) -> PathBuf {
        self.common_dir.join("commitpilot").join("config.toml")
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_worktree_uses_common_dir() {
        let info = RepoInfo {
            git_dir: PathBuf::from("/repo/.git/worktrees/feature"),
            common_dir: PathBuf::from("/repo/.git"),
            work_dir: PathBuf::from("/feature"),
        };
        let paths = SessionPaths::from_repo_info(&info);

        assert_eq!(paths.git_config_path(), PathBuf::from("/repo/.git/config"));
        assert_eq!(
            paths.repo_config_path(),
            PathBuf::from("/repo/.git/commitpilot/config.toml")
        );
        assert_eq!(
            paths.cache_path(),
            PathBuf::from("/feature/.commitpilot-cache.json")
        );
        assert_eq!(paths.ignore_path(), PathBuf::from("/feature/.gitignore"));
    }

    #[test]
    fn ignore_pattern_is_anchored() {
        let paths = SessionPaths::new(PathBuf::from("/r"), PathBuf::from("/r/.git"));
        assert_eq!(paths.ignore_pattern(), "/.commitpilot-cache.json");
    }
}

//! git::interface
//!
//! Repository access using git2.
//!
//! Discovery and configuration reads go through `git2`; mutations (staging,
//! committing, pushing) are left to the `git` executable so that hooks,
//! credential helpers and user configuration behave exactly as on the
//! command line.
//!
//! # Error Handling
//!
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working tree
//! - [`GitError::Config`]: Repository configuration could not be parsed
//!
//! # Example
//!
//! ```ignore
//! use commitpilot::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let info = git.info()?;
//! let remotes = Git::read_remotes(&info.common_dir.join("config"))?;
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// Repository configuration could not be read.
    #[error("cannot read git config '{path}': {message}")]
    Config {
        /// The config file
        path: PathBuf,
        /// The git2 error message
        message: String,
    },
}

/// Information about a Git repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    /// Path to the per-worktree .git directory
    pub git_dir: PathBuf,
    /// Path to the shared git directory
    pub common_dir: PathBuf,
    /// Path to working directory
    pub work_dir: PathBuf,
}

/// Handle to a discovered repository.
pub struct Git {
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("git_dir", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Discover the repository containing `path`.
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get repository information (git_dir, common_dir and work_dir paths).
    pub fn info(&self) -> Result<RepoInfo, GitError> {
        let git_dir = self.repo.path().to_path_buf();
        let common_dir = self.repo.commondir().to_path_buf();
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        Ok(RepoInfo {
            git_dir,
            common_dir,
            work_dir,
        })
    }

    /// Discover remote names from a repository config file.
    ///
    /// Collects the subsection of every `[remote "<name>"]` section, in file
    /// order, without duplicates. Returns `Ok(None)` when the file does not
    /// exist.
    pub fn read_remotes(config_path: &Path) -> Result<Option<Vec<String>>, GitError> {
        if !config_path.exists() {
            return Ok(None);
        }

        let config_err = |e: git2::Error| GitError::Config {
            path: config_path.to_path_buf(),
            message: e.message().to_string(),
        };

        let config = git2::Config::open(config_path).map_err(config_err)?;
        let mut entries = config.entries(None).map_err(config_err)?;

        let mut remotes: Vec<String> = Vec::new();
        while let Some(entry) = entries.next() {
            let entry = entry.map_err(config_err)?;
            if let Some(name) = entry.name().and_then(remote_from_key) {
                if !remotes.iter().any(|r| r == name) {
                    remotes.push(name.to_string());
                }
            }
        }

        Ok(Some(remotes))
    }
}

/// Extract the remote name from a config key such as `remote.origin.url`.
///
/// Remote names may themselves contain dots.
fn remote_from_key(key: &str) -> Option<&str> {
    let rest = key.strip_prefix("remote.")?;
    let (name, _variable) = rest.rsplit_once('.')?;
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

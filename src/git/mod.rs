//! git
//!
//! Read-only repository access.
//!
//! # Architecture
//!
//! This module is the only place that imports `git2`. It answers two
//! questions for a session: where the repository lives, and which remotes
//! its configuration defines. Everything that changes the repository runs
//! through the `git` executable in [`crate::engine::pipeline`].
//!
//! # Example
//!
//! ```ignore
//! use commitpilot::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let info = git.info()?;
//! println!("work tree: {}", info.work_dir.display());
//! ```

mod interface;

pub use interface::{Git, GitError, RepoInfo};

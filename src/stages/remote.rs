//! stages::remote
//!
//! Remote selection.
//!
//! Remotes come from `[remote "<name>"]` sections of the repository
//! configuration. Without a configuration file, or without any remote in
//! it, the fallback remote is used and no prompt is shown.

use std::path::PathBuf;

use super::{checked_index, Stage, StageContext, StageError};
use crate::cache::CacheKey;
use crate::core::types::RemoteList;
use crate::git::Git;
use crate::ui::output;

/// Choose the remote to push to.
#[derive(Debug, Clone)]
pub struct RemoteStage {
    config_path: PathBuf,
    fallback: String,
}

impl RemoteStage {
    /// `config_path` is the repository configuration file; `fallback` is
    /// used when it defines no remotes.
    pub fn new(config_path: PathBuf, fallback: impl Into<String>) -> Self {
        Self {
            config_path,
            fallback: fallback.into(),
        }
    }
}

impl Stage for RemoteStage {
    type Output = String;

    fn name(&self) -> &'static str {
        "remote"
    }

    fn run(&self, cx: &mut StageContext<'_>) -> Result<String, StageError> {
        let discovered = match Git::read_remotes(&self.config_path) {
            Ok(Some(names)) if !names.is_empty() => names,
            Ok(Some(_)) => {
                output::debug("no remotes configured, using fallback", cx.verbosity);
                return Ok(self.fallback.clone());
            }
            Ok(None) => {
                output::debug(
                    format!("{} not found, using fallback", self.config_path.display()),
                    cx.verbosity,
                );
                return Ok(self.fallback.clone());
            }
            Err(e) => {
                output::warn(format!("{}; using '{}'", e, self.fallback), cx.verbosity);
                return Ok(self.fallback.clone());
            }
        };

        let remotes = RemoteList::new(discovered, &self.fallback);
        let cached = cx.cache.get_text(CacheKey::Remote);
        let default = remotes.default_index(cached.as_deref());

        let index = cx
            .prompter
            .select("Select the remote to push to", remotes.names(), default)
            .and_then(|i| checked_index(i, remotes.len()))
            .map_err(|e| self.prompt_error(e))?;

        let remote = remotes.names()[index].clone();
        cx.remember(CacheKey::Remote, remote.as_str().into());
        Ok(remote)
    }
}

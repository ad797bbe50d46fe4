//! stages
//!
//! The interactive steps of a commit session.
//!
//! # Architecture
//!
//! Each stage produces exactly one value for the session and may reflect
//! it into the preference cache. Stages share the [`Stage`] trait and get
//! their collaborators through a [`StageContext`]:
//!
//! - [`CommitTypeStage`] - select one of the eleven commit types
//! - [`ScopeStage`] - optional free-text scope
//! - [`MessageStage`] - non-empty commit message
//! - [`LintStage`] - whether to run the lint step
//! - [`RemoteStage`] - which remote to push to
//! - [`BranchStage`] - current branch (not interactive)
//!
//! # Errors
//!
//! A prompt failure (cancel, I/O error, no terminal) is a [`StageError`].
//! The session treats any stage error as fatal. A failed cache write is
//! only a warning: preferences are a convenience, not session state.

mod branch;
mod commit_type;
mod lint;
mod message;
mod remote;
mod scope;

pub use branch::BranchStage;
pub use commit_type::CommitTypeStage;
pub use lint::LintStage;
pub use message::MessageStage;
pub use remote::RemoteStage;
pub use scope::ScopeStage;

use thiserror::Error;

use crate::cache::{CacheKey, CacheValue, PreferenceStore};
use crate::engine::process::CommandRunner;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::{PromptError, Prompter};

/// Errors from running a stage.
#[derive(Debug, Error)]
pub enum StageError {
    /// The prompt could not produce an answer.
    #[error("{stage} prompt failed: {source}")]
    Prompt {
        stage: &'static str,
        #[source]
        source: PromptError,
    },

    /// An external command needed by the stage failed.
    #[error("{command} failed: {message}")]
    Command { command: String, message: String },
}

/// Collaborators available to every stage.
pub struct StageContext<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub cache: &'a dyn PreferenceStore,
    pub runner: &'a mut dyn CommandRunner,
    pub verbosity: Verbosity,
}

impl<'a> StageContext<'a> {
    /// Persist a preference, downgrading failures to a warning.
    pub fn remember(&self, key: CacheKey, value: CacheValue) {
        remember(self.cache, key, value, self.verbosity);
    }
}

/// Persist a preference, downgrading failures to a warning.
pub(crate) fn remember(
    cache: &dyn PreferenceStore,
    key: CacheKey,
    value: CacheValue,
    verbosity: Verbosity,
) {
    if let Err(e) = cache.set(key, value) {
        output::warn(format!("could not remember {}: {}", key, e), verbosity);
    }
}

/// One step of the session that yields a single value.
pub trait Stage {
    type Output;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Run the stage.
    fn run(&self, cx: &mut StageContext<'_>) -> Result<Self::Output, StageError>;

    /// Wrap a prompt error with this stage's name.
    fn prompt_error(&self, source: PromptError) -> StageError {
        StageError::Prompt {
            stage: self.name(),
            source,
        }
    }
}

/// Check that a selection index is within `len` options.
pub(crate) fn checked_index(index: usize, len: usize) -> Result<usize, PromptError> {
    if index < len {
        Ok(index)
    } else {
        Err(PromptError::IoError(format!(
            "selection {} out of range ({} options)",
            index, len
        )))
    }
}

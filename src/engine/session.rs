//! engine::session
//!
//! The session orchestrator.
//!
//! # State Machine
//!
//! ```text
//! CheckEnvironment -> CommitType -> Scope -> Message -> LintDecision
//!     -> Remote -> Branch -> [Lint] -> Stage -> Commit -> Push -> Done
//! ```
//!
//! Every state advances only when the previous one succeeded. Any failure
//! moves to `Aborted`, after which nothing else runs. `Lint` is skipped
//! when the user declined linting.
//!
//! # Invariants
//!
//! - A stage error (including a cancelled prompt) ends the session before
//!   any pipeline command runs
//! - Pipeline commands run in order, at most once each
//! - The preference cache is only written by stages

use std::fmt;
use std::path::PathBuf;

use super::pipeline::{Pipeline, PipelineRequest, PipelineResult, StepKind};
use super::process::{git_available, CommandRunner};
use crate::cache::FilePreferenceStore;
use crate::core::config::Config;
use crate::core::ignore::{ensure_ignored, IgnoreOutcome};
use crate::core::paths::SessionPaths;
use crate::core::types::{CommitSpec, CommitType, LintChoice};
use crate::git::Git;
use crate::stages::{
    BranchStage, CommitTypeStage, LintStage, MessageStage, RemoteStage, ScopeStage, Stage,
    StageContext,
};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts::Prompter;

/// States of a commit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    CheckEnvironment,
    CommitType,
    Scope,
    Message,
    LintDecision,
    Remote,
    Branch,
    Lint,
    Stage,
    Commit,
    Push,
    Done,
    Aborted,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::CheckEnvironment => "check-environment",
            SessionState::CommitType => "commit-type",
            SessionState::Scope => "scope",
            SessionState::Message => "message",
            SessionState::LintDecision => "lint-decision",
            SessionState::Remote => "remote",
            SessionState::Branch => "branch",
            SessionState::Lint => "lint",
            SessionState::Stage => "stage",
            SessionState::Commit => "commit",
            SessionState::Push => "push",
            SessionState::Done => "done",
            SessionState::Aborted => "aborted",
        }
    }

    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Done | SessionState::Aborted)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StepKind> for SessionState {
    fn from(kind: StepKind) -> Self {
        match kind {
            StepKind::Lint => SessionState::Lint,
            StepKind::Stage => SessionState::Stage,
            StepKind::Commit => SessionState::Commit,
            StepKind::Push => SessionState::Push,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The commit was created and pushed.
    Completed {
        title: String,
        remote: String,
        branch: String,
    },
    /// The session stopped in `state`.
    Aborted { state: SessionState, reason: String },
    /// `git` is not available.
    EnvironmentMissing,
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed { .. })
    }

    /// The terminal state the session ended in.
    pub fn final_state(&self) -> SessionState {
        match self {
            SessionOutcome::Completed { .. } => SessionState::Done,
            SessionOutcome::Aborted { .. } | SessionOutcome::EnvironmentMissing => {
                SessionState::Aborted
            }
        }
    }
}

/// Values collected by the prompt stages.
#[derive(Debug, Default)]
struct Draft {
    kind: Option<CommitType>,
    scope: Option<String>,
    message: Option<String>,
    lint: Option<LintChoice>,
    remote: Option<String>,
    branch: Option<String>,
}

/// Settings for a session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Directory to discover the repository from.
    pub cwd: PathBuf,
    pub verbosity: Verbosity,
    /// Use this global config file instead of searching the usual places.
    pub global_config_override: Option<PathBuf>,
}

/// A single commit session.
pub struct Session {
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self { options }
    }

    /// Run the session to a terminal state.
    pub fn run(
        &self,
        prompter: &mut dyn Prompter,
        runner: &mut dyn CommandRunner,
    ) -> SessionOutcome {
        let verbosity = self.options.verbosity;

        if !git_available(runner) {
            output::error("this tool requires git, but git was not found");
            return SessionOutcome::EnvironmentMissing;
        }

        let (paths, config) = match self.prepare() {
            Ok(prepared) => prepared,
            Err(reason) => return abort(SessionState::CheckEnvironment, reason),
        };

        let cache = FilePreferenceStore::new(paths.cache_path()).with_verbosity(verbosity);
        match ensure_ignored(&paths.ignore_path(), &paths.ignore_pattern()) {
            Ok(IgnoreOutcome::Appended) => output::debug(
                format!("added cache rule to {}", paths.ignore_path().display()),
                verbosity,
            ),
            Ok(IgnoreOutcome::AlreadyPresent) => {}
            Err(e) => output::warn(e, verbosity),
        }

        let mut draft = Draft::default();
        let mut state = SessionState::CommitType;
        {
            let mut cx = StageContext {
                prompter,
                cache: &cache,
                runner: &mut *runner,
                verbosity,
            };

            while state != SessionState::Lint {
                output::debug(format!("state: {}", state), verbosity);
                match self.advance(state, &mut draft, &paths, &config, &mut cx) {
                    Ok(next) => state = next,
                    Err(reason) => return abort(state, reason),
                }
            }
        }

        let spec = match draft.spec() {
            Ok(spec) => spec,
            Err(reason) => return abort(state, reason),
        };
        let (remote, branch) = match (draft.remote, draft.branch) {
            (Some(remote), Some(branch)) => (remote, branch),
            _ => return abort(state, "remote or branch was not resolved".to_string()),
        };

        let title = spec.title();
        let lint_command = config.lint_command();
        let run_lint = draft.lint.is_some_and(|c| c.is_yes());
        let request = PipelineRequest {
            work_dir: paths.work_dir(),
            title: &title,
            remote: &remote,
            branch: &branch,
            lint_command: run_lint.then_some(lint_command.as_slice()),
            verify_hooks: config.verify_hooks(),
        };
        let pipeline = Pipeline::plan(&request);

        match pipeline.run(runner, verbosity) {
            PipelineResult::Completed { .. } => {
                output::debug(format!("state: {}", SessionState::Done), verbosity);
                output::success(
                    format!("committed \"{}\" and pushed to {} {}", title, remote, branch),
                    verbosity,
                );
                SessionOutcome::Completed {
                    title,
                    remote,
                    branch,
                }
            }
            PipelineResult::Aborted {
                failed, diagnostic, ..
            } => SessionOutcome::Aborted {
                state: failed.into(),
                reason: diagnostic,
            },
        }
    }

    /// Discover the repository and load configuration.
    fn prepare(&self) -> Result<(SessionPaths, Config), String> {
        let git = Git::open(&self.options.cwd).map_err(|e| e.to_string())?;
        let info = git.info().map_err(|e| e.to_string())?;
        let paths = SessionPaths::from_repo_info(&info);
        output::debug(
            format!("work tree: {}", paths.work_dir.display()),
            self.options.verbosity,
        );

        let repo_config = paths.repo_config_path();
        let config = match &self.options.global_config_override {
            Some(global) => Config::load_from(Some(global.as_path()), Some(repo_config.as_path())),
            None => Config::load(Some(repo_config.as_path())),
        }
        .map_err(|e| e.to_string())?;

        Ok((paths, config))
    }

    /// Run the stage for `state` and return the next state.
    fn advance(
        &self,
        state: SessionState,
        draft: &mut Draft,
        paths: &SessionPaths,
        config: &Config,
        cx: &mut StageContext<'_>,
    ) -> Result<SessionState, String> {
        let next = match state {
            SessionState::CommitType => {
                draft.kind = Some(CommitTypeStage.run(cx).map_err(|e| e.to_string())?);
                SessionState::Scope
            }
            SessionState::Scope => {
                draft.scope = ScopeStage.run(cx).map_err(|e| e.to_string())?;
                SessionState::Message
            }
            SessionState::Message => {
                draft.message = Some(MessageStage.run(cx).map_err(|e| e.to_string())?);
                SessionState::LintDecision
            }
            SessionState::LintDecision => {
                draft.lint = Some(LintStage.run(cx).map_err(|e| e.to_string())?);
                SessionState::Remote
            }
            SessionState::Remote => {
                let stage = RemoteStage::new(paths.git_config_path(), config.default_remote());
                draft.remote = Some(stage.run(cx).map_err(|e| e.to_string())?);
                SessionState::Branch
            }
            SessionState::Branch => {
                let stage = BranchStage::new(paths.work_dir.clone());
                draft.branch = Some(stage.run(cx).map_err(|e| e.to_string())?);
                SessionState::Lint
            }
            other => return Err(format!("no prompt stage for state '{}'", other)),
        };
        Ok(next)
    }
}

impl Draft {
    /// Assemble the commit spec from collected answers.
    fn spec(&self) -> Result<CommitSpec, String> {
        let kind = self.kind.ok_or("commit type was not selected")?;
        let message = self
            .message
            .as_deref()
            .ok_or("commit message was not entered")?;
        CommitSpec::new(kind, self.scope.as_deref(), message).map_err(|e| e.to_string())
    }
}

/// Report an abort and build the outcome.
fn abort(state: SessionState, reason: String) -> SessionOutcome {
    output::error(&reason);
    SessionOutcome::Aborted { state, reason }
}

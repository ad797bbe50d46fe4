//! engine::pipeline
//!
//! The commit pipeline: lint, stage, commit, push.
//!
//! # Architecture
//!
//! A [`Pipeline`] is plain data built from the session's answers. Building
//! it performs no I/O, so it can be shown or inspected before anything runs.
//! [`Pipeline::run`] executes the steps in order and stops at the first
//! failure.
//!
//! # Invariants
//!
//! - Steps run strictly in order, one at a time
//! - A failed step ends the pipeline; later steps never start
//! - Nothing is retried and nothing is rolled back (a failed push leaves
//!   the local commit in place)
//!
//! # Example
//!
//! ```
//! use commitpilot::engine::pipeline::{Pipeline, PipelineRequest, StepKind};
//! use std::path::Path;
//!
//! let request = PipelineRequest {
//!     work_dir: Path::new("/repo"),
//!     title: "fix: typo",
//!     remote: "origin",
//!     branch: "main",
//!     lint_command: None,
//!     verify_hooks: true,
//! };
//! let pipeline = Pipeline::plan(&request);
//!
//! let kinds: Vec<_> = pipeline.steps().iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![StepKind::Stage, StepKind::Commit, StepKind::Push]);
//! ```

use std::fmt;
use std::path::Path;

use super::process::{CommandRunner, CommandSpec, ProcessOutput};
use crate::ui::output::{self, Verbosity};

/// Kind of pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    Lint,
    Stage,
    Commit,
    Push,
}

impl StepKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Lint => "lint",
            StepKind::Stage => "stage",
            StepKind::Commit => "commit",
            StepKind::Push => "push",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One external command in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    pub kind: StepKind,
    pub label: String,
    pub command: CommandSpec,
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The command exited zero.
    Success {
        /// Captured standard output.
        stdout: String,
    },
    /// The command could not start or exited non-zero.
    Failure {
        /// Captured error text to show the user.
        diagnostic: String,
    },
}

/// Result of running the whole pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineResult {
    /// Every step succeeded.
    Completed {
        /// Steps that ran, in order.
        applied: Vec<StepKind>,
    },
    /// A step failed; later steps did not run.
    Aborted {
        /// The step that failed.
        failed: StepKind,
        /// Captured error text.
        diagnostic: String,
        /// Steps that succeeded before the failure.
        applied: Vec<StepKind>,
    },
}

impl PipelineResult {
    pub fn is_completed(&self) -> bool {
        matches!(self, PipelineResult::Completed { .. })
    }

    /// Steps that succeeded.
    pub fn applied(&self) -> &[StepKind] {
        match self {
            PipelineResult::Completed { applied } => applied,
            PipelineResult::Aborted { applied, .. } => applied,
        }
    }
}

/// Inputs needed to build a pipeline.
#[derive(Debug, Clone)]
pub struct PipelineRequest<'a> {
    /// Directory every command runs in.
    pub work_dir: &'a Path,
    /// Formatted commit title.
    pub title: &'a str,
    pub remote: &'a str,
    pub branch: &'a str,
    /// Lint program and arguments; `None` skips the lint step.
    pub lint_command: Option<&'a [String]>,
    /// When false, commit and push pass `--no-verify`.
    pub verify_hooks: bool,
}

/// Ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<PipelineStep>,
}

impl Pipeline {
    /// Build the pipeline for a request.
    pub fn plan(request: &PipelineRequest<'_>) -> Self {
        let dir = request.work_dir;
        let mut steps = Vec::with_capacity(4);

        if let Some(command) = request.lint_command.and_then(CommandSpec::from_argv) {
            steps.push(PipelineStep {
                kind: StepKind::Lint,
                label: format!("lint: {}", command),
                command: command.in_dir(dir).streamed(),
            });
        }

        steps.push(PipelineStep {
            kind: StepKind::Stage,
            label: "stage all changes".to_string(),
            command: CommandSpec::git(["add", "."]).in_dir(dir).streamed(),
        });

        let mut commit_args = vec!["commit".to_string()];
        let mut push_args = vec!["push".to_string()];
        if !request.verify_hooks {
            commit_args.push("--no-verify".to_string());
            push_args.push("--no-verify".to_string());
        }
        commit_args.extend(["-m".to_string(), request.title.to_string()]);
        push_args.extend([request.remote.to_string(), request.branch.to_string()]);

        steps.push(PipelineStep {
            kind: StepKind::Commit,
            label: format!("commit \"{}\"", request.title),
            command: CommandSpec::git(commit_args).in_dir(dir).streamed(),
        });

        let push = CommandSpec::git(push_args).in_dir(dir).streamed();
        steps.push(PipelineStep {
            kind: StepKind::Push,
            label: push.to_string(),
            command: push,
        });

        Self { steps }
    }

    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    /// Run the steps in order, stopping at the first failure.
    pub fn run(&self, runner: &mut dyn CommandRunner, verbosity: Verbosity) -> PipelineResult {
        let mut applied = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            match step.kind {
                StepKind::Push => output::success(format!("running: {}", step.label), verbosity),
                _ => output::print(format!("running: {}", step.label), verbosity),
            }
            output::debug(format!("exec: {}", step.command), verbosity);

            match run_step(step, runner) {
                StepOutcome::Success { stdout } => {
                    let stdout = stdout.trim_end();
                    if !stdout.is_empty() {
                        output::print(stdout, verbosity);
                    }
                    applied.push(step.kind);
                }
                StepOutcome::Failure { diagnostic } => {
                    output::error(format!("{} failed", step.kind));
                    output::diagnostic(&diagnostic);
                    return PipelineResult::Aborted {
                        failed: step.kind,
                        diagnostic,
                        applied,
                    };
                }
            }
        }

        PipelineResult::Completed { applied }
    }
}

/// Run one step and classify its result.
pub fn run_step(step: &PipelineStep, runner: &mut dyn CommandRunner) -> StepOutcome {
    match runner.run(&step.command) {
        Ok(out) if out.success() => StepOutcome::Success { stdout: out.stdout },
        Ok(out) => StepOutcome::Failure {
            diagnostic: failure_text(&step.command, &out),
        },
        Err(e) => StepOutcome::Failure {
            diagnostic: format!("failed to run {}: {}", step.command.program, e),
        },
    }
}

/// Pick the most useful text from a failed process.
///
/// Prefers stderr, then stdout (many linters report there), then the exit
/// status.
fn failure_text(command: &CommandSpec, out: &ProcessOutput) -> String {
    let stderr = out.stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = out.stdout.trim();
    if !stdout.is_empty() {
        return stdout.to_string();
    }
    match out.code {
        Some(code) => format!("{} exited with status {}", command, code),
        None => format!("{} was terminated by a signal", command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::process::OutputMode;
    use std::collections::VecDeque;
    use std::io;

    /// Runner that records commands and replays canned outputs.
    struct ScriptedRunner {
        outputs: VecDeque<io::Result<ProcessOutput>>,
        seen: Vec<CommandSpec>,
    }

    impl ScriptedRunner {
        fn new(outputs: Vec<io::Result<ProcessOutput>>) -> Self {
            Self {
                outputs: outputs.into(),
                seen: Vec::new(),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&mut self, command: &CommandSpec) -> io::Result<ProcessOutput> {
            self.seen.push(command.clone());
            self.outputs
                .pop_front()
                .unwrap_or_else(|| Ok(ProcessOutput::ok("")))
        }
    }

    fn lint_argv() -> Vec<String> {
        vec!["npm".into(), "run".into(), "lint:cache".into()]
    }

    fn request<'a>(lint: Option<&'a [String]>, verify_hooks: bool) -> PipelineRequest<'a> {
        PipelineRequest {
            work_dir: Path::new("/repo"),
            title: "feat(api): add login",
            remote: "upstream",
            branch: "feature/login",
            lint_command: lint,
            verify_hooks,
        }
    }

    #[test]
    fn plan_with_lint() {
        let argv = lint_argv();
        let pipeline = Pipeline::plan(&request(Some(&argv), true));

        let commands: Vec<String> = pipeline
            .steps()
            .iter()
            .map(|s| s.command.to_string())
            .collect();
        assert_eq!(
            commands,
            vec![
                "npm run lint:cache",
                "git add .",
                "git commit -m \"feat(api): add login\"",
                "git push upstream feature/login",
            ]
        );
        assert!(pipeline
            .steps()
            .iter()
            .all(|s| s.command.cwd.as_deref() == Some(Path::new("/repo"))));
        assert!(pipeline
            .steps()
            .iter()
            .all(|s| s.command.mode == OutputMode::Stream));
    }

    #[test]
    fn plan_without_lint() {
        let pipeline = Pipeline::plan(&request(None, true));
        assert_eq!(pipeline.steps()[0].kind, StepKind::Stage);
        assert_eq!(pipeline.steps().len(), 3);
    }

    #[test]
    fn plan_empty_lint_command_is_skipped() {
        let empty: Vec<String> = Vec::new();
        let pipeline = Pipeline::plan(&request(Some(&empty), true));
        assert_eq!(pipeline.steps().len(), 3);
    }

    #[test]
    fn plan_no_verify() {
        let pipeline = Pipeline::plan(&request(None, false));
        let commit = &pipeline.steps()[1].command;
        assert_eq!(
            commit.args,
            vec!["commit", "--no-verify", "-m", "feat(api): add login"]
        );
        let push = &pipeline.steps()[2].command;
        assert_eq!(
            push.args,
            vec!["push", "--no-verify", "upstream", "feature/login"]
        );
    }

    #[test]
    fn commit_title_is_single_argument() {
        let pipeline = Pipeline::plan(&request(None, true));
        let commit = &pipeline.steps()[1].command;
        assert_eq!(commit.args.last().map(String::as_str), Some("feat(api): add login"));
    }

    #[test]
    fn lint_failure_stops_everything() {
        let argv = lint_argv();
        let pipeline = Pipeline::plan(&request(Some(&argv), true));
        let mut runner = ScriptedRunner::new(vec![Ok(ProcessOutput::failed(1, "3 problems"))]);

        let result = pipeline.run(&mut runner, Verbosity::Quiet);

        assert_eq!(
            result,
            PipelineResult::Aborted {
                failed: StepKind::Lint,
                diagnostic: "3 problems".to_string(),
                applied: vec![],
            }
        );
        assert_eq!(runner.seen.len(), 1);
        assert_eq!(runner.seen[0].program, "npm");
    }

    #[test]
    fn push_failure_keeps_commit() {
        let pipeline = Pipeline::plan(&request(None, true));
        let mut runner = ScriptedRunner::new(vec![
            Ok(ProcessOutput::ok("")),
            Ok(ProcessOutput::ok("[main abc123] feat(api): add login")),
            Ok(ProcessOutput::failed(128, "rejected")),
        ]);

        let result = pipeline.run(&mut runner, Verbosity::Quiet);

        assert!(!result.is_completed());
        assert_eq!(result.applied(), &[StepKind::Stage, StepKind::Commit]);
    }

    #[test]
    fn all_steps_succeed() {
        let argv = lint_argv();
        let pipeline = Pipeline::plan(&request(Some(&argv), true));
        let mut runner = ScriptedRunner::new(vec![]);

        let result = pipeline.run(&mut runner, Verbosity::Quiet);

        assert_eq!(
            result,
            PipelineResult::Completed {
                applied: vec![
                    StepKind::Lint,
                    StepKind::Stage,
                    StepKind::Commit,
                    StepKind::Push
                ],
            }
        );
        assert_eq!(runner.seen.len(), 4);
    }

    #[test]
    fn spawn_error_is_failure() {
        let argv = lint_argv();
        let pipeline = Pipeline::plan(&request(Some(&argv), true));
        let mut runner = ScriptedRunner::new(vec![Err(io::Error::new(
            io::ErrorKind::NotFound,
            "no such file",
        ))]);

        let result = pipeline.run(&mut runner, Verbosity::Quiet);

        match result {
            PipelineResult::Aborted {
                failed, diagnostic, ..
            } => {
                assert_eq!(failed, StepKind::Lint);
                assert!(diagnostic.contains("failed to run npm"));
            }
            other => panic!("expected abort, got {:?}", other),
        }
    }

    #[test]
    fn failure_text_fallbacks() {
        let cmd = CommandSpec::git(["add", "."]);
        let out = ProcessOutput {
            code: Some(1),
            stdout: "lint output\n".into(),
            stderr: "  ".into(),
        };
        assert_eq!(failure_text(&cmd, &out), "lint output");

        let out = ProcessOutput::failed(2, "");
        assert_eq!(failure_text(&cmd, &out), "git add . exited with status 2");
    }
}

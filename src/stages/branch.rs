//! stages::branch
//!
//! Current branch lookup. Not interactive: asks git directly.
//!
//! `symbolic-ref` reports the branch even before the first commit. On a
//! detached HEAD it fails and `rev-parse --abbrev-ref` answers instead.

use std::path::PathBuf;

use super::{Stage, StageContext, StageError};
use crate::engine::process::CommandSpec;
use crate::ui::output;

/// Look up the checked-out branch.
#[derive(Debug, Clone)]
pub struct BranchStage {
    work_dir: PathBuf,
}

impl BranchStage {
    pub fn new(work_dir: PathBuf) -> Self {
        Self { work_dir }
    }
}

impl Stage for BranchStage {
    type Output = String;

    fn name(&self) -> &'static str {
        "branch"
    }

    fn run(&self, cx: &mut StageContext<'_>) -> Result<String, StageError> {
        let symbolic =
            CommandSpec::git(["symbolic-ref", "--short", "HEAD"]).in_dir(&self.work_dir);
        let out = cx
            .runner
            .run(&symbolic)
            .map_err(|e| command_error(&symbolic, e))?;
        if out.success() {
            return branch_name(&symbolic, &out.stdout);
        }

        output::debug(format!("{} failed, HEAD is detached", symbolic), cx.verbosity);
        let abbrev =
            CommandSpec::git(["rev-parse", "--abbrev-ref", "HEAD"]).in_dir(&self.work_dir);
        let out = cx.runner.run(&abbrev).map_err(|e| command_error(&abbrev, e))?;
        if !out.success() {
            return Err(command_error(&abbrev, out.stderr.trim()));
        }
        branch_name(&abbrev, &out.stdout)
    }
}

fn command_error(command: &CommandSpec, message: impl ToString) -> StageError {
    StageError::Command {
        command: command.to_string(),
        message: message.to_string(),
    }
}

/// Trimmed branch name from a lookup's stdout.
fn branch_name(command: &CommandSpec, stdout: &str) -> Result<String, StageError> {
    let branch = stdout.trim();
    if branch.is_empty() {
        return Err(command_error(command, "no branch name reported"));
    }
    Ok(branch.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryPreferenceStore;
    use crate::engine::process::{CommandRunner, ProcessOutput, SystemRunner};
    use crate::stages::testing::{ScriptedPrompter, ScriptedRunner};
    use crate::ui::output::Verbosity;
    use std::io;
    use std::path::Path;

    fn run_on(
        runner: &mut dyn CommandRunner,
        work_dir: &Path,
    ) -> (Result<String, StageError>, usize) {
        let cache = MemoryPreferenceStore::new();
        let mut prompter = ScriptedPrompter::default();
        let result = {
            let mut cx = StageContext {
                prompter: &mut prompter,
                cache: &cache,
                runner,
                verbosity: Verbosity::Quiet,
            };
            BranchStage::new(work_dir.to_path_buf()).run(&mut cx)
        };
        (result, prompter.prompts)
    }

    fn run_with(
        outputs: Vec<io::Result<ProcessOutput>>,
    ) -> (Result<String, StageError>, ScriptedRunner) {
        let mut runner = ScriptedRunner::new(outputs);
        let (result, prompts) = run_on(&mut runner, Path::new("/repo"));
        assert_eq!(prompts, 0);
        (result, runner)
    }

    #[test]
    fn returns_trimmed_branch_without_prompting() {
        let (result, runner) = run_with(vec![Ok(ProcessOutput::ok("feature/login\n"))]);

        assert_eq!(result.unwrap(), "feature/login");
        assert_eq!(runner.seen.len(), 1);
        assert_eq!(runner.seen[0].to_string(), "git symbolic-ref --short HEAD");
        assert_eq!(runner.seen[0].cwd.as_deref(), Some(Path::new("/repo")));
    }

    #[test]
    fn detached_head_falls_back_to_rev_parse() {
        let (result, runner) = run_with(vec![
            Ok(ProcessOutput::failed(128, "fatal: ref HEAD is not a symbolic ref")),
            Ok(ProcessOutput::ok("HEAD\n")),
        ]);

        assert_eq!(result.unwrap(), "HEAD");
        assert_eq!(
            runner.seen[1].to_string(),
            "git rev-parse --abbrev-ref HEAD"
        );
    }

    #[test]
    fn failure_is_command_error() {
        let (result, _) = run_with(vec![
            Ok(ProcessOutput::failed(128, "fatal: not a git repository")),
            Ok(ProcessOutput::failed(128, "fatal: not a git repository\n")),
        ]);

        match result {
            Err(StageError::Command { command, message }) => {
                assert_eq!(command, "git rev-parse --abbrev-ref HEAD");
                assert_eq!(message, "fatal: not a git repository");
            }
            other => panic!("expected command error, got {:?}", other),
        }
    }

    #[test]
    fn empty_output_is_error() {
        let (result, _) = run_with(vec![Ok(ProcessOutput::ok("\n"))]);
        assert!(result.is_err());
    }

    #[test]
    fn fresh_repository_reports_initial_branch() {
        let temp = tempfile::TempDir::new().unwrap();
        let repo = git2::Repository::init(temp.path()).unwrap();
        let expected = repo
            .find_reference("HEAD")
            .unwrap()
            .symbolic_target()
            .and_then(|target| target.strip_prefix("refs/heads/"))
            .unwrap()
            .to_string();

        let (result, _) = run_on(&mut SystemRunner, temp.path());

        assert_eq!(result.unwrap(), expected);
    }
}

//! engine::process
//!
//! External process invocation.
//!
//! # Design
//!
//! Every external command (git, the lint runner) goes through the
//! [`CommandRunner`] trait. The system implementation spawns real processes
//! and captures their output; tests substitute a recording runner so that
//! pipeline ordering can be asserted without touching a repository.
//!
//! Pipeline steps run in [`OutputMode::Stream`] so lint and push progress
//! appears as it happens and hooks can read from the terminal. Queries whose
//! output the session needs run in [`OutputMode::Capture`].

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// How a child's standard streams are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Capture stdout and stderr; stdin is closed.
    #[default]
    Capture,
    /// Share the terminal's stdin and stdout so progress shows live.
    /// Only stderr is captured.
    Stream,
}

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Directory to run in; the current directory when `None`.
    pub cwd: Option<PathBuf>,
    pub mode: OutputMode,
}

impl CommandSpec {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            mode: OutputMode::Capture,
        }
    }

    /// Stream stdout to the terminal instead of capturing it.
    pub fn streamed(mut self) -> Self {
        self.mode = OutputMode::Stream;
        self
    }

    /// Run the command in `dir`.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Build a `git <args>` command.
    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git", args)
    }

    /// Build a command from an argv vector (program first).
    ///
    /// Returns `None` for an empty vector.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program, args.iter().cloned()))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(char::is_whitespace) {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, or `None` if terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// A successful output with the given stdout.
    ///
    /// Streamed commands always report an empty stdout.
    pub fn ok(stdout: &str) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// A failed output with the given exit code and stderr.
    pub fn failed(code: i32, stderr: &str) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_string(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands to completion.
pub trait CommandRunner {
    /// Run `command` and wait for it to exit.
    ///
    /// Returns `Err` only if the process could not be started.
    fn run(&mut self, command: &CommandSpec) -> io::Result<ProcessOutput>;
}

/// Runner that spawns real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec) -> io::Result<ProcessOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(cwd) = &command.cwd {
            cmd.current_dir(cwd);
        }

        let output = match command.mode {
            OutputMode::Capture => cmd.output()?,
            OutputMode::Stream => cmd
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::piped())
                .spawn()?
                .wait_with_output()?,
        };

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Check that `git` can be started.
pub fn git_available(runner: &mut dyn CommandRunner) -> bool {
    runner
        .run(&CommandSpec::git(["--version"]))
        .map(|output| output.success())
        .unwrap_or(false)
}

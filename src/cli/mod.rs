//! cli
//!
//! Command-line interface layer for commitpilot.
//!
//! # Responsibilities
//!
//! - Parse command-line flags
//! - Build the terminal prompter and system runner
//! - Run one session and hand its outcome to `main`
//!
//! # Exit Status
//!
//! `main` exits with status 1 only for [`SessionOutcome::EnvironmentMissing`].
//! Aborted sessions have already printed their diagnostics and exit 0.

pub mod args;

pub use args::Cli;

use anyhow::{Context, Result};

use crate::engine::process::SystemRunner;
use crate::engine::session::{Session, SessionOptions, SessionOutcome};
use crate::ui::output;
use crate::ui::prompts::TerminalPrompter;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<SessionOutcome> {
    let cli = Cli::parse_args();
    let verbosity = cli.verbosity();

    let cwd = match &cli.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    output::debug(format!("cwd: {}", cwd.display()), verbosity);

    let session = Session::new(SessionOptions {
        cwd,
        verbosity,
        global_config_override: None,
    });

    let mut prompter = TerminalPrompter::new(cli.interactive());
    let mut runner = SystemRunner;
    Ok(session.run(&mut prompter, &mut runner))
}

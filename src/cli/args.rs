//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if started in that directory
//! - `--debug`: Enable debug output
//! - `--quiet` / `-q`: Minimal output
//!
//! No flag carries commit content. Type, scope, message, lint choice and
//! remote are always gathered interactively.

use clap::Parser;
use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Commitpilot - compose a conventional commit, lint, commit and push
#[derive(Parser, Debug)]
#[command(name = "commitpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if commitpilot was started in this directory
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, conflicts_with = "quiet")]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Whether prompts can be shown (stdout is a terminal).
    pub fn interactive(&self) -> bool {
        console::user_attended()
    }
}

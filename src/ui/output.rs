//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output respects the quiet and debug flags. Diagnostics (warnings, errors,
//! debug lines) go to stderr; progress and confirmations go to stdout.
//! Labels are colored only when the target stream is a terminal.

use std::fmt::Display;

use console::{style, Term};

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

fn stdout_is_tty() -> bool {
    Term::stdout().is_term()
}

fn stderr_is_tty() -> bool {
    Term::stderr().is_term()
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        let label = if stderr_is_tty() {
            style("[debug]").dim().to_string()
        } else {
            "[debug]".to_string()
        };
        eprintln!("{} {}", label, message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    let label = if stderr_is_tty() {
        style("error:").red().bold().to_string()
    } else {
        "error:".to_string()
    };
    eprintln!("{} {}", label, message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        let label = if stderr_is_tty() {
            style("warning:").yellow().bold().to_string()
        } else {
            "warning:".to_string()
        };
        eprintln!("{} {}", label, message);
    }
}

/// Print a success message (respects quiet mode).
pub fn success(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        if stdout_is_tty() {
            println!("{}", style(message).green());
        } else {
            println!("{}", message);
        }
    }
}

/// Print captured diagnostic text from a child process (always shown).
///
/// Trailing whitespace is dropped; empty diagnostics print nothing.
pub fn diagnostic(text: &str) {
    let text = text.trim_end();
    if !text.is_empty() {
        eprintln!("{}", text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
    }

    #[test]
    fn debug_flag() {
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }
}

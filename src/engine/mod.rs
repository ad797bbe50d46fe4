//! engine
//!
//! Runs a commit session from environment check to push.
//!
//! # Architecture
//!
//! - [`session`] - The state machine that sequences prompt stages and the
//!   pipeline, and reports a [`session::SessionOutcome`]
//! - [`pipeline`] - The ordered lint/stage/commit/push commands
//! - [`process`] - The [`process::CommandRunner`] seam over external programs
//!
//! # Invariants
//!
//! - The pipeline is planned only after every stage succeeded
//! - Repository mutations happen only through pipeline steps
//!
//! # Example
//!
//! ```ignore
//! use commitpilot::engine::process::SystemRunner;
//! use commitpilot::engine::session::{Session, SessionOptions};
//! use commitpilot::ui::output::Verbosity;
//! use commitpilot::ui::prompts::TerminalPrompter;
//!
//! let session = Session::new(SessionOptions {
//!     cwd: std::env::current_dir()?,
//!     verbosity: Verbosity::Normal,
//!     global_config_override: None,
//! });
//! let outcome = session.run(&mut TerminalPrompter::new(true), &mut SystemRunner);
//! ```

pub mod pipeline;
pub mod process;
pub mod session;

pub use session::{Session, SessionOptions, SessionOutcome, SessionState};

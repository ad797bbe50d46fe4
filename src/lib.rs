//! Commitpilot - an interactive assistant for conventional commits
//!
//! Commitpilot walks the user through composing a conventional commit title
//! (type, optional scope, message), remembers the answers per repository,
//! and then runs the lint, stage, commit and push steps in order, stopping
//! at the first failure.
//!
//! # Architecture
//!
//! - [`cli`] - Argument parsing and the process entry point
//! - [`engine`] - Session state machine, command pipeline, process runner
//! - [`stages`] - The interactive steps of a session
//! - [`core`] - Domain types, configuration, paths, ignore-file upkeep
//! - [`cache`] - Per-repository preference cache
//! - [`git`] - Read-only repository discovery and remote listing
//! - [`ui`] - Prompts and terminal output
//!
//! # Correctness Invariants
//!
//! 1. No repository command runs until every prompt has been answered
//! 2. Pipeline steps run in order and stop at the first failure
//! 3. A commit title always has the form `type(scope): message` or
//!    `type: message` with a non-empty message
//! 4. The preference cache never ends up tracked by git

pub mod cache;
pub mod cli;
pub mod core;
pub mod engine;
pub mod git;
pub mod stages;
pub mod ui;

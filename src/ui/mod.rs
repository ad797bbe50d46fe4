//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Select and text-input prompts behind the [`prompts::Prompter`] trait
//! - [`output`] - Verbosity-aware messages and diagnostics
//!
//! # Design
//!
//! All output and prompts go through this module so that quiet and debug
//! modes behave the same everywhere, and so that tests can replace the
//! terminal with a scripted prompter.

pub mod output;
pub mod prompts;

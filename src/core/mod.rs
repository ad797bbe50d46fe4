//! core
//!
//! Domain types and repository-local housekeeping.
//!
//! # Modules
//!
//! - [`types`] - Commit types, commit specs, lint choice, remote lists
//! - [`config`] - Configuration schema and loading
//! - [`paths`] - Where the cache, ignore file and configs live
//! - [`ignore`] - Keeping the preference cache out of version control
//!
//! # Design Principles
//!
//! - A [`types::CommitSpec`] cannot hold an empty message
//! - Config schemas are strict and reject unknown keys

pub mod config;
pub mod ignore;
pub mod paths;
pub mod types;

//! core::ignore
//!
//! Keeps the preference cache out of version control.
//!
//! The check reads the ignore file line by line. A rule matches when a
//! non-comment line names the cache file at the root (`name`, `/name` or
//! `**/name`) and no later `!` line negates it. When nothing matches, a
//! two-line block (comment + pattern) is appended. An unreadable ignore
//! file is treated as empty rather than as an error.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comment line written above the ignore pattern.
pub const IGNORE_COMMENT: &str = "# commitpilot preference cache";

/// Errors from updating the ignore file.
#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("failed to update ignore file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What `ensure_ignored` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreOutcome {
    /// A matching rule was already present.
    AlreadyPresent,
    /// The rule block was appended.
    Appended,
}

/// Load ignore rules, or `None` if the file cannot be read as text.
fn read_rules(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok()
}

/// Check whether `content` ignores `file_name` at the work tree root.
///
/// Only `name`, `/name` and `**/name` count. Rules are read in order, so a
/// later `!name` negation un-ignores the file again.
pub fn has_rule(content: &str, file_name: &str) -> bool {
    let mut ignored = false;
    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.strip_prefix('!') {
            Some(negated) if names_root_file(negated, file_name) => ignored = false,
            Some(_) => {}
            None if names_root_file(line, file_name) => ignored = true,
            None => {}
        }
    }
    ignored
}

/// Whether a single pattern selects `file_name` at the root.
fn names_root_file(pattern: &str, file_name: &str) -> bool {
    let pattern = pattern
        .strip_prefix("**/")
        .or_else(|| pattern.strip_prefix('/'))
        .unwrap_or(pattern);
    pattern == file_name
}

/// Ensure the ignore file at `path` contains `pattern`.
///
/// `pattern` is matched by its final path component, so `/.cache.json`
/// and `.cache.json` both count as present. An existing rule that only
/// covers another directory, or one negated later, does not.
pub fn ensure_ignored(path: &Path, pattern: &str) -> Result<IgnoreOutcome, IgnoreError> {
    let file_name = pattern.rsplit('/').next().unwrap_or(pattern);
    let content = read_rules(path).unwrap_or_default();

    if has_rule(&content, file_name) {
        return Ok(IgnoreOutcome::AlreadyPresent);
    }

    let mut block = String::new();
    if !content.is_empty() && !content.ends_with('\n') {
        block.push('\n');
    }
    block.push_str(IGNORE_COMMENT);
    block.push('\n');
    block.push_str(pattern);
    block.push('\n');

    let write_err = |source| IgnoreError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(block.as_bytes()).map_err(write_err)?;

    Ok(IgnoreOutcome::Appended)
}

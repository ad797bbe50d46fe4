//! core::types
//!
//! Domain types for a commit session.
//!
//! # Types
//!
//! - [`CommitType`] - One of the eleven conventional commit categories
//! - [`CommitSpec`] - Type, optional scope and message; renders the title
//! - [`LintChoice`] - Whether to run the lint step
//! - [`RemoteList`] - Remote names discovered from repository configuration
//!
//! # Invariants
//!
//! - `CommitType::ALL` order is stable; cached indices refer to it
//! - A `CommitSpec` message is never blank
//! - A `RemoteList` is never empty

use std::fmt;

use thiserror::Error;

/// Errors from constructing domain types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// Commit message is empty after trimming.
    #[error("commit message cannot be empty")]
    EmptyMessage,

    /// Unknown commit type token.
    #[error("unknown commit type: {0}")]
    UnknownCommitType(String),
}

/// A conventional commit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Feat,
    Build,
    Chore,
    Ci,
    Docs,
    Fix,
    Perf,
    Refactor,
    Revert,
    Style,
    Test,
}

impl CommitType {
    /// All commit types in menu order.
    pub const ALL: [CommitType; 11] = [
        CommitType::Feat,
        CommitType::Build,
        CommitType::Chore,
        CommitType::Ci,
        CommitType::Docs,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Revert,
        CommitType::Style,
        CommitType::Test,
    ];

    /// The short token written into the commit title.
    pub fn token(&self) -> &'static str {
        match self {
            CommitType::Feat => "feat",
            CommitType::Build => "build",
            CommitType::Chore => "chore",
            CommitType::Ci => "ci",
            CommitType::Docs => "docs",
            CommitType::Fix => "fix",
            CommitType::Perf => "perf",
            CommitType::Refactor => "refactor",
            CommitType::Revert => "revert",
            CommitType::Style => "style",
            CommitType::Test => "test",
        }
    }

    /// Human-readable description shown next to the token.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Feat => "a new feature",
            CommitType::Build => "build system, release or dependency changes",
            CommitType::Chore => "other changes, such as tooling or build process tweaks",
            CommitType::Ci => "continuous integration changes",
            CommitType::Docs => "documentation only",
            CommitType::Fix => "a bug fix",
            CommitType::Perf => "performance or user-experience improvements",
            CommitType::Refactor => "code restructuring without behavior change",
            CommitType::Revert => "revert a previous commit",
            CommitType::Style => "formatting only (not CSS)",
            CommitType::Test => "add or update tests",
        }
    }

    /// Menu label: token followed by description.
    pub fn label(&self) -> String {
        format!("{} {}", self.token(), self.description())
    }

    /// Position of this type in [`CommitType::ALL`].
    pub fn index(&self) -> usize {
        CommitType::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or_default()
    }

    /// Look up a type by its menu position.
    pub fn from_index(index: usize) -> Option<CommitType> {
        CommitType::ALL.get(index).copied()
    }

    /// Parse a token such as `"fix"`.
    pub fn from_token(token: &str) -> Result<CommitType, TypeError> {
        CommitType::ALL
            .iter()
            .copied()
            .find(|t| t.token() == token)
            .ok_or_else(|| TypeError::UnknownCommitType(token.to_string()))
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The parts of a commit title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSpec {
    kind: CommitType,
    scope: Option<String>,
    message: String,
}

impl CommitSpec {
    /// Build a commit spec.
    ///
    /// A blank scope is treated as no scope. Scope and message are trimmed.
    pub fn new(
        kind: CommitType,
        scope: Option<&str>,
        message: &str,
    ) -> Result<CommitSpec, TypeError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(TypeError::EmptyMessage);
        }

        let scope = scope
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(CommitSpec {
            kind,
            scope,
            message: message.to_string(),
        })
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Render the commit title: `type(scope): message` or `type: message`.
    pub fn title(&self) -> String {
        match &self.scope {
            Some(scope) => format!("{}({}): {}", self.kind.token(), scope, self.message),
            None => format!("{}: {}", self.kind.token(), self.message),
        }
    }
}

impl fmt::Display for CommitSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title())
    }
}

/// Whether the lint step runs before staging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintChoice {
    Yes,
    No,
}

impl LintChoice {
    /// Choices in menu order.
    pub const ALL: [LintChoice; 2] = [LintChoice::Yes, LintChoice::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            LintChoice::Yes => "yes",
            LintChoice::No => "no",
        }
    }

    /// Position in [`LintChoice::ALL`].
    pub fn index(&self) -> usize {
        match self {
            LintChoice::Yes => 0,
            LintChoice::No => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<LintChoice> {
        LintChoice::ALL.get(index).copied()
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, LintChoice::Yes)
    }
}

impl fmt::Display for LintChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, de-duplicated remote names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteList {
    names: Vec<String>,
}

impl RemoteList {
    /// Build a list from discovered names, falling back to `fallback` when
    /// nothing was discovered. Duplicates keep their first position.
    pub fn new<I, S>(discovered: I, fallback: &str) -> RemoteList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in discovered {
            let name = name.into();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        if names.is_empty() {
            names.push(fallback.to_string());
        }
        RemoteList { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Position of `name`, if present.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Default selection: the cached remote if still present, else the first.
    pub fn default_index(&self, cached: Option<&str>) -> usize {
        cached.and_then(|c| self.position(c)).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod commit_type {
        use super::*;

        #[test]
        fn eleven_types_in_order() {
            let tokens: Vec<_> = CommitType::ALL.iter().map(|t| t.token()).collect();
            assert_eq!(
                tokens,
                vec![
                    "feat", "build", "chore", "ci", "docs", "fix", "perf", "refactor", "revert",
                    "style", "test"
                ]
            );
        }

        #[test]
        fn index_round_trip() {
            for (i, t) in CommitType::ALL.iter().enumerate() {
                assert_eq!(t.index(), i);
                assert_eq!(CommitType::from_index(i), Some(*t));
            }
            assert_eq!(CommitType::from_index(11), None);
        }

        #[test]
        fn label_starts_with_token() {
            for t in CommitType::ALL {
                assert!(t.label().starts_with(&format!("{} ", t.token())));
            }
        }

        #[test]
        fn from_token() {
            assert_eq!(CommitType::from_token("perf"), Ok(CommitType::Perf));
            assert_eq!(
                CommitType::from_token("feature"),
                Err(TypeError::UnknownCommitType("feature".into()))
            );
        }
    }

    mod commit_spec {
        use super::*;

        #[test]
        fn title_without_scope() {
            let spec = CommitSpec::new(CommitType::Fix, Some(""), "typo").unwrap();
            assert_eq!(spec.title(), "fix: typo");
        }

        #[test]
        fn title_with_scope() {
            let spec = CommitSpec::new(CommitType::Feat, Some("api"), "add login").unwrap();
            assert_eq!(spec.title(), "feat(api): add login");
        }

        #[test]
        fn blank_scope_is_none() {
            let spec = CommitSpec::new(CommitType::Docs, Some("   "), "readme").unwrap();
            assert_eq!(spec.scope(), None);
            assert_eq!(spec.title(), "docs: readme");
        }

        #[test]
        fn trims_parts() {
            let spec = CommitSpec::new(CommitType::Ci, Some(" build "), "  cache deps ").unwrap();
            assert_eq!(spec.title(), "ci(build): cache deps");
        }

        #[test]
        fn blank_message_rejected() {
            assert_eq!(
                CommitSpec::new(CommitType::Fix, None, " \t "),
                Err(TypeError::EmptyMessage)
            );
        }
    }

    mod lint_choice {
        use super::*;

        #[test]
        fn indices() {
            assert_eq!(LintChoice::Yes.index(), 0);
            assert_eq!(LintChoice::No.index(), 1);
            assert_eq!(LintChoice::from_index(1), Some(LintChoice::No));
            assert_eq!(LintChoice::from_index(2), None);
        }
    }

    mod remote_list {
        use super::*;

        #[test]
        fn empty_falls_back() {
            let list = RemoteList::new(Vec::<String>::new(), "origin");
            assert_eq!(list.names(), ["origin".to_string()]);
        }

        #[test]
        fn deduplicates_in_order() {
            let list = RemoteList::new(["origin", "upstream", "origin"], "origin");
            assert_eq!(list.names(), ["origin".to_string(), "upstream".to_string()]);
        }

        #[test]
        fn default_index_uses_cached() {
            let list = RemoteList::new(["origin", "upstream"], "origin");
            assert_eq!(list.default_index(Some("upstream")), 1);
        }

        #[test]
        fn default_index_falls_back_to_first() {
            let list = RemoteList::new(["origin", "upstream"], "origin");
            assert_eq!(list.default_index(Some("fork")), 0);
            assert_eq!(list.default_index(None), 0);
        }
    }
}

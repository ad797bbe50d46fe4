//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$COMMITPILOT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/commitpilot/config.toml`
//! 3. `~/.commitpilot/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/commitpilot/config.toml`.
//!
//! # Validation
//!
//! Config values are validated after parsing: lint commands must name a
//! program and remote names must be plain identifiers.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// verify_hooks = true
///
/// [lint]
/// command = ["npm", "run", "lint:cache"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Run git hooks on commit and push
    pub verify_hooks: Option<bool>,

    /// Lint step settings
    pub lint: Option<LintConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(lint) = &self.lint {
            lint.validate()?;
        }
        Ok(())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// default_remote = "origin"
///
/// [lint]
/// command = ["cargo", "clippy", "--", "-D", "warnings"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Remote used when the repository defines none (default: "origin")
    pub default_remote: Option<String>,

    /// Lint step settings
    pub lint: Option<LintConfig>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.default_remote {
            if remote.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "default_remote cannot be empty".to_string(),
                ));
            }
            if remote.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid default_remote '{}': must not contain whitespace",
                    remote
                )));
            }
        }

        if let Some(lint) = &self.lint {
            lint.validate()?;
        }

        Ok(())
    }
}

/// Lint step configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Program and arguments, e.g. `["npm", "run", "lint:cache"]`
    pub command: Option<Vec<String>>,
}

impl LintConfig {
    /// Validate the lint configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(command) = &self.command {
            match command.first() {
                None => {
                    return Err(ConfigError::InvalidValue(
                        "lint.command cannot be empty".to_string(),
                    ))
                }
                Some(program) if program.trim().is_empty() => {
                    return Err(ConfigError::InvalidValue(
                        "lint.command must start with a program name".to_string(),
                    ))
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

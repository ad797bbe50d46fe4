//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! commitpilot works without any configuration. Two optional scopes can
//! adjust the lint command, hook verification and the fallback remote:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$COMMITPILOT_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/commitpilot/config.toml`
//! 3. `~/.commitpilot/config.toml`
//!
//! # Repo Config Location
//!
//! `<common git dir>/commitpilot/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use commitpilot::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Lint: {}", config.lint_command().join(" "));
//! println!("Fallback remote: {}", config.default_remote());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, LintConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Lint command used when none is configured.
pub const DEFAULT_LINT_COMMAND: &[&str] = &["npm", "run", "lint:cache"];

/// Remote used when the repository defines none.
pub const DEFAULT_REMOTE: &str = "origin";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence: repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if present)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `repo_config` is provided and exists, it is loaded as the repo
    /// scope.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. Missing files are not an error.
    pub fn load(repo_config: Option<&Path>) -> Result<Config, ConfigError> {
        let global = Self::find_global();
        Self::load_from(global.as_deref(), repo_config)
    }

    /// Load configuration from explicit file locations.
    pub fn load_from(
        global_config: Option<&Path>,
        repo_config: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let (global, global_path) = match global_config {
            Some(path) if path.exists() => {
                (read_config::<GlobalConfig>(path)?, Some(path.to_path_buf()))
            }
            _ => (GlobalConfig::default(), None),
        };

        let (repo, repo_path) = match repo_config {
            Some(path) if path.exists() => (
                Some(read_config::<RepoConfig>(path)?),
                Some(path.to_path_buf()),
            ),
            _ => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    /// Locate the global config file, if any exists.
    fn find_global() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("COMMITPILOT_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("commitpilot/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".commitpilot/config.toml"))
            .filter(|path| path.exists())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Lint program and arguments.
    ///
    /// Defaults to `npm run lint:cache`.
    pub fn lint_command(&self) -> Vec<String> {
        self.repo
            .as_ref()
            .and_then(|r| r.lint.as_ref())
            .and_then(|l| l.command.clone())
            .or_else(|| {
                self.global
                    .lint
                    .as_ref()
                    .and_then(|l| l.command.clone())
            })
            .unwrap_or_else(|| DEFAULT_LINT_COMMAND.iter().map(|s| s.to_string()).collect())
    }

    /// Remote used when the repository defines none.
    ///
    /// Defaults to "origin".
    pub fn default_remote(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.default_remote.as_deref())
            .unwrap_or(DEFAULT_REMOTE)
    }

    /// Check if git hooks run on commit and push.
    ///
    /// Defaults to `true`.
    pub fn verify_hooks(&self) -> bool {
        self.global.verify_hooks.unwrap_or(true)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

/// Read and parse one TOML config file.
fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

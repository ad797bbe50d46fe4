//! ui::prompts
//!
//! Interactive prompts.
//!
//! # Design
//!
//! Stages never talk to the terminal directly. They go through the
//! [`Prompter`] trait, which has a terminal implementation backed by
//! `dialoguer` and can be replaced by a scripted implementation in tests.
//!
//! Prompts are only shown in interactive mode. In non-interactive mode
//! every prompt fails with [`PromptError::NotInteractive`].

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

/// Validator for free-text input.
///
/// Returning `Err(message)` rejects the input, shows `message` and
/// re-prompts. The validator may have side effects.
pub type Validator<'v> = &'v mut dyn FnMut(&str) -> Result<(), String>;

/// Source of interactive answers.
pub trait Prompter {
    /// Prompt to select from a list of options.
    ///
    /// Returns the index of the selected option.
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize, PromptError>;

    /// Prompt for text input.
    ///
    /// `default` is returned when the user just presses enter. Empty input
    /// is allowed; use `validator` to reject it.
    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Validator<'_>,
    ) -> Result<String, PromptError>;
}

/// Prompter backed by the terminal.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    interactive: bool,
}

impl TerminalPrompter {
    /// Create a terminal prompter.
    pub fn new(interactive: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            interactive,
        }
    }
}

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        message: &str,
        options: &[String],
        default: usize,
    ) -> Result<usize, PromptError> {
        if !self.interactive {
            return Err(PromptError::NotInteractive);
        }

        let selection = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(default.min(options.len().saturating_sub(1)))
            .interact_opt()
            .map_err(|e| PromptError::IoError(e.to_string()))?;

        selection.ok_or(PromptError::Cancelled)
    }

    fn input(
        &mut self,
        message: &str,
        default: Option<&str>,
        validator: Validator<'_>,
    ) -> Result<String, PromptError> {
        if !self.interactive {
            return Err(PromptError::NotInteractive);
        }

        let mut prompt = Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|text: &String| validator(text.as_str()));

        if let Some(default) = default {
            prompt = prompt.default(default.to_string()).show_default(true);
        }

        prompt
            .interact_text()
            .map_err(|e| PromptError::IoError(e.to_string()))
    }
}

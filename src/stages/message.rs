//! stages::message
//!
//! Commit message input.
//!
//! Validation rejects blank input. Accepting a message that differs from
//! the cached one writes it to the cache immediately, from inside the
//! validator, so the text survives even if a later stage is cancelled.

use super::{remember, Stage, StageContext, StageError};
use crate::cache::CacheKey;

/// Shown when the input is blank.
pub const EMPTY_MESSAGE_ERROR: &str = "commit message cannot be empty";

/// Prompt for the commit message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageStage;

impl Stage for MessageStage {
    type Output = String;

    fn name(&self) -> &'static str {
        "message"
    }

    fn run(&self, cx: &mut StageContext<'_>) -> Result<String, StageError> {
        let cache = cx.cache;
        let verbosity = cx.verbosity;
        let last = cache
            .get_text(CacheKey::CommitMsg)
            .filter(|m| !m.trim().is_empty());

        let prompt = if last.is_some() {
            "Commit message (enter to reuse the last message)"
        } else {
            "Commit message (cannot be empty)"
        };

        let mut validate = |text: &str| -> Result<(), String> {
            let text = text.trim();
            if text.is_empty() {
                return Err(EMPTY_MESSAGE_ERROR.to_string());
            }
            if last.as_deref() != Some(text) {
                remember(cache, CacheKey::CommitMsg, text.into(), verbosity);
            }
            Ok(())
        };

        let message = cx
            .prompter
            .input(prompt, last.as_deref(), &mut validate)
            .map_err(|e| self.prompt_error(e))?;

        Ok(message.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{MemoryPreferenceStore, PreferenceStore};
    use crate::stages::testing::{Answer, ScriptedPrompter, ScriptedRunner};
    use crate::ui::output::Verbosity;

    fn run_with(
        cache: &MemoryPreferenceStore,
        answers: Vec<Answer>,
    ) -> (Result<String, StageError>, ScriptedPrompter) {
        let mut prompter = ScriptedPrompter::new(answers);
        let mut runner = ScriptedRunner::default();
        let mut cx = StageContext {
            prompter: &mut prompter,
            cache,
            runner: &mut runner,
            verbosity: Verbosity::Quiet,
        };
        let result = MessageStage.run(&mut cx);
        (result, prompter)
    }

    #[test]
    fn rejects_blank_and_reprompts() {
        let cache = MemoryPreferenceStore::new();
        let (result, prompter) = run_with(
            &cache,
            vec![Answer::Text("   "), Answer::Text(""), Answer::Text("add login")],
        );

        assert_eq!(result.unwrap(), "add login");
        assert_eq!(prompter.rejections.len(), 2);
        assert!(prompter.rejections.iter().all(|r| r == EMPTY_MESSAGE_ERROR));
    }

    #[test]
    fn persists_new_message_during_validation() {
        let cache = MemoryPreferenceStore::new();
        let (result, _) = run_with(&cache, vec![Answer::Text("fix typo")]);

        assert_eq!(result.unwrap(), "fix typo");
        assert_eq!(cache.get_text(CacheKey::CommitMsg), Some("fix typo".into()));
    }

    #[test]
    fn cached_message_is_default() {
        let cache = MemoryPreferenceStore::with_values([(CacheKey::CommitMsg, "wip".into())]);
        let (result, prompter) = run_with(&cache, vec![Answer::Default]);

        assert_eq!(result.unwrap(), "wip");
        assert_eq!(prompter.input_defaults, vec![Some("wip".to_string())]);
        assert_eq!(cache.write_count(), 0, "unchanged message is not rewritten");
    }

    #[test]
    fn no_default_without_cache() {
        let cache = MemoryPreferenceStore::new();
        let (_, prompter) = run_with(&cache, vec![Answer::Text("x")]);

        assert_eq!(prompter.input_defaults, vec![None]);
    }

    #[test]
    fn message_is_trimmed() {
        let cache = MemoryPreferenceStore::new();
        let (result, _) = run_with(&cache, vec![Answer::Text("  tidy up  ")]);

        assert_eq!(result.unwrap(), "tidy up");
        assert_eq!(cache.get_text(CacheKey::CommitMsg), Some("tidy up".into()));
    }

    #[test]
    fn cancel_after_rejection_keeps_cache_untouched() {
        let cache = MemoryPreferenceStore::new();
        let (result, _) = run_with(&cache, vec![Answer::Text(" "), Answer::Cancel]);

        assert!(result.is_err());
        assert_eq!(cache.write_count(), 0);
    }
}

//! stages::lint
//!
//! Yes/no choice for running the lint step. The cache stores the index.

use super::{checked_index, Stage, StageContext, StageError};
use crate::cache::CacheKey;
use crate::core::types::LintChoice;

/// Ask whether to lint before committing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LintStage;

impl Stage for LintStage {
    type Output = LintChoice;

    fn name(&self) -> &'static str {
        "lint"
    }

    fn run(&self, cx: &mut StageContext<'_>) -> Result<LintChoice, StageError> {
        let options: Vec<String> = LintChoice::ALL.iter().map(|c| c.to_string()).collect();
        let default = cx
            .cache
            .get_index(CacheKey::Lint)
            .and_then(LintChoice::from_index)
            .unwrap_or(LintChoice::Yes)
            .index();

        let index = cx
            .prompter
            .select("Run lint before committing?", &options, default)
            .and_then(|i| checked_index(i, options.len()))
            .map_err(|e| self.prompt_error(e))?;

        let choice = LintChoice::ALL[index];
        cx.remember(CacheKey::Lint, choice.index().into());
        Ok(choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheValue, MemoryPreferenceStore, PreferenceStore};
    use crate::stages::testing::{Answer, ScriptedPrompter, ScriptedRunner};
    use crate::ui::output::Verbosity;

    fn run_with(
        cache: &MemoryPreferenceStore,
        answer: Answer,
    ) -> (Result<LintChoice, StageError>, ScriptedPrompter) {
        let mut prompter = ScriptedPrompter::new(vec![answer]);
        let mut runner = ScriptedRunner::default();
        let mut cx = StageContext {
            prompter: &mut prompter,
            cache,
            runner: &mut runner,
            verbosity: Verbosity::Quiet,
        };
        let result = LintStage.run(&mut cx);
        (result, prompter)
    }

    #[test]
    fn defaults_to_yes() {
        let cache = MemoryPreferenceStore::new();
        let (result, prompter) = run_with(&cache, Answer::Default);

        assert_eq!(result.unwrap(), LintChoice::Yes);
        assert_eq!(prompter.select_defaults, vec![0]);
        assert_eq!(cache.get_index(CacheKey::Lint), Some(0));
    }

    #[test]
    fn cached_no_is_default() {
        let cache = MemoryPreferenceStore::with_values([(CacheKey::Lint, CacheValue::Index(1))]);
        let (result, prompter) = run_with(&cache, Answer::Default);

        assert_eq!(result.unwrap(), LintChoice::No);
        assert_eq!(prompter.select_defaults, vec![1]);
    }

    #[test]
    fn invalid_cached_index_defaults_to_yes() {
        let cache = MemoryPreferenceStore::with_values([(CacheKey::Lint, CacheValue::Index(7))]);
        let (_, prompter) = run_with(&cache, Answer::Default);

        assert_eq!(prompter.select_defaults, vec![0]);
    }

    #[test]
    fn persists_choice() {
        let cache = MemoryPreferenceStore::new();
        let (result, _) = run_with(&cache, Answer::Select(1));

        assert_eq!(result.unwrap(), LintChoice::No);
        assert_eq!(cache.get_index(CacheKey::Lint), Some(1));
    }
}

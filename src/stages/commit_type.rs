//! stages::commit_type
//!
//! Select the commit type.
//!
//! The cache stores the *index* of the chosen type, not its token, so the
//! cached default stays valid if label wording changes.

use super::{checked_index, Stage, StageContext, StageError};
use crate::cache::CacheKey;
use crate::core::types::CommitType;

/// Prompt for one of the eleven commit types.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitTypeStage;

impl CommitTypeStage {
    /// Menu position to preselect.
    fn default_index(cx: &StageContext<'_>) -> usize {
        cx.cache
            .get_index(CacheKey::CommitType)
            .filter(|i| *i < CommitType::ALL.len())
            .unwrap_or(0)
    }
}

impl Stage for CommitTypeStage {
    type Output = CommitType;

    fn name(&self) -> &'static str {
        "commit type"
    }

    fn run(&self, cx: &mut StageContext<'_>) -> Result<CommitType, StageError> {
        let labels: Vec<String> = CommitType::ALL.iter().map(CommitType::label).collect();
        let default = Self::default_index(cx);

        let index = cx
            .prompter
            .select("Select the type of change", &labels, default)
            .and_then(|i| checked_index(i, labels.len()))
            .map_err(|e| self.prompt_error(e))?;

        let kind = CommitType::ALL[index];
        cx.remember(CacheKey::CommitType, index.into());
        Ok(kind)
    }
}

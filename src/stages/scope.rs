//! stages::scope
//!
//! Optional commit scope. Any input is accepted; blank means no scope.

use super::{Stage, StageContext, StageError};

/// Prompt for the area of the code the change affects.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeStage;

impl Stage for ScopeStage {
    type Output = Option<String>;

    fn name(&self) -> &'static str {
        "scope"
    }

    fn run(&self, cx: &mut StageContext<'_>) -> Result<Option<String>, StageError> {
        let mut accept_all = |_: &str| -> Result<(), String> { Ok(()) };

        let scope = cx
            .prompter
            .input(
                "Scope of the change (module, layer or file; enter to skip)",
                None,
                &mut accept_all,
            )
            .map_err(|e| self.prompt_error(e))?;

        let scope = scope.trim();
        Ok(if scope.is_empty() {
            None
        } else {
            Some(scope.to_string())
        })
    }
}

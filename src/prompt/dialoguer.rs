//! Dialoguer-based implementations of prompt interfaces

use super::interface::{
    ConfirmationConfig, ConfirmationPrompter, MultipleChoiceConfig, MultipleChoicePrompter,
    TextPromptConfig, TextPrompter,
};
use crate::error::Result;
use dialoguer::{Confirm, Input, MultiSelect};

/// Dialoguer-based implementation of all prompt interfaces
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPrompter for DialoguerPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(&config.prompt);
        if let Some(default) = config.default.as_deref().filter(|d| !d.is_empty()) {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }
}

impl MultipleChoicePrompter for DialoguerPrompter {
    fn prompt_multiple_choice(
        &self,
        config: &MultipleChoiceConfig,
    ) -> Result<Vec<usize>> {
        let indices = MultiSelect::new()
            .with_prompt(&config.prompt)
            .items(&config.choices)
            .defaults(&config.defaults)
            .interact()?;

        Ok(indices)
    }
}

impl ConfirmationPrompter for DialoguerPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
        let result = Confirm::new()
            .with_prompt(&config.prompt)
            .default(config.default)
            .interact()?;

        Ok(result)
    }
}

//! User prompting
//!
//! - `interface`: library-independent prompt traits and their configurations
//! - `dialoguer`: terminal implementation backed by the `dialoguer` crate

pub mod dialoguer;
pub mod interface;

pub use self::dialoguer::DialoguerPrompter;
pub use interface::{
    ConfirmationConfig, ConfirmationPrompter, MultipleChoiceConfig, MultipleChoicePrompter,
    PromptProvider, TextPromptConfig, TextPrompter,
};

/// Asks a yes/no question.
pub fn confirm(
    prompter: &dyn PromptProvider,
    prompt: impl Into<String>,
    default: bool,
) -> crate::error::Result<bool> {
    prompter.prompt_confirmation(&ConfirmationConfig { prompt: prompt.into(), default })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use std::cell::RefCell;

    /// Answers every confirmation with its default and records the prompt.
    #[derive(Default)]
    struct DefaultsPrompter {
        asked: RefCell<Vec<String>>,
    }

    impl TextPrompter for DefaultsPrompter {
        fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
            Ok(config.default.clone().unwrap_or_default())
        }
    }

    impl MultipleChoicePrompter for DefaultsPrompter {
        fn prompt_multiple_choice(&self, _: &MultipleChoiceConfig) -> Result<Vec<usize>> {
            Ok(Vec::new())
        }
    }

    impl ConfirmationPrompter for DefaultsPrompter {
        fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
            self.asked.borrow_mut().push(config.prompt.clone());
            Ok(config.default)
        }
    }

    #[test]
    fn confirm_always_asks() {
        let prompter = DefaultsPrompter::default();
        assert!(!confirm(&prompter, "Continue anyway?", false).unwrap());
        assert!(confirm(&prompter, String::from("Use current dir?"), true).unwrap());
        assert_eq!(*prompter.asked.borrow(), ["Continue anyway?", "Use current dir?"]);
    }
}

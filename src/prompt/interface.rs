//! Pure interfaces for prompting without external dependencies
//!
//! These interfaces are independent of any specific UI library, which lets
//! the answer collector be driven by scripted prompters in tests.

use crate::error::Result;

/// Configuration for text input prompts
#[derive(Debug, Clone)]
pub struct TextPromptConfig {
    pub prompt: String,
    pub default: Option<String>,
}

/// Configuration for multiple choice selection
#[derive(Debug, Clone)]
pub struct MultipleChoiceConfig {
    pub prompt: String,
    pub choices: Vec<String>,
    pub defaults: Vec<bool>,
}

/// Configuration for boolean confirmation
#[derive(Debug, Clone)]
pub struct ConfirmationConfig {
    pub prompt: String,
    pub default: bool,
}

/// Abstract interface for text input prompts
pub trait TextPrompter {
    fn prompt_text(&self, config: &TextPromptConfig) -> Result<String>;
}

/// Abstract interface for multiple choice selection
pub trait MultipleChoicePrompter {
    fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig)
        -> Result<Vec<usize>>;
}

/// Abstract interface for boolean confirmation
pub trait ConfirmationPrompter {
    fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool>;
}

/// Combined interface that provides all prompt types
pub trait PromptProvider: TextPrompter + MultipleChoicePrompter + ConfirmationPrompter {}

// Blanket implementation for any type that implements all prompt interfaces
impl<T> PromptProvider for T where
    T: TextPrompter + MultipleChoicePrompter + ConfirmationPrompter
{
}

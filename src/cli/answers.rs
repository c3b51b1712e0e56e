use crate::{
    config::{
        is_valid_email, normalize_choices, parse_port, ProjectConfig, ANIMATION_CHOICES,
        STYLING_CHOICES,
    },
    constants::{defaults, STDIN_INDICATOR},
    error::{Error, Result},
    ioutils::{parse_string_to_json, read_from},
    prompt::{
        ConfirmationConfig, MultipleChoiceConfig, PromptProvider, TextPromptConfig,
    },
};
use serde_json::{Map, Value};
use std::path::Path;

/// Styling preselected by the prompt and used when answers are not asked for.
const DEFAULT_STYLING: &str = "tailwind";

/// Collects answers from command line arguments and user prompts
pub struct AnswerCollector<'a> {
    prompter: &'a dyn PromptProvider,
    non_interactive: bool,
}

/// Name of the current OS user, the default author.
fn current_user() -> String {
    std::env::var("USER").or_else(|_| std::env::var("USERNAME")).unwrap_or_default()
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn PromptProvider, non_interactive: bool) -> Self {
        Self { prompter, non_interactive }
    }

    /// Reads pre-supplied answers from `--answers` (inline JSON or `-` for
    /// stdin) or from `--answers-file`.
    pub fn read_answers(
        &self,
        cli_answers: Option<&str>,
        answers_file: Option<&Path>,
    ) -> Result<Map<String, Value>> {
        let buf = match (cli_answers, answers_file) {
            (Some(STDIN_INDICATOR), _) => read_from(std::io::stdin())?,
            (Some(json), _) => json.to_string(),
            (None, Some(path)) => std::fs::read_to_string(path)?,
            (None, None) => return Ok(Map::new()),
        };
        let answers = parse_string_to_json(&buf)?;
        log::debug!("Pre-supplied answers: {}", Value::Object(answers.clone()));
        Ok(answers)
    }

    /// Completes `preset` by asking for every missing answer, then validates it.
    pub fn collect(&self, preset: Map<String, Value>) -> Result<ProjectConfig> {
        let mut answers = preset;

        self.ask(&mut answers, "project_name", |c| {
            c.text("Project Name", Some(defaults::PROJECT_NAME.to_string()))
        })?;
        self.ask(&mut answers, "author_name", |c| c.text("Author Name", Some(current_user())))?;
        self.ask(&mut answers, "author_email", |c| c.email())?;
        self.ask(&mut answers, "description", |c| {
            c.text("Project Description", Some(defaults::DESCRIPTION.to_string()))
        })?;
        self.ask(&mut answers, "styling", |c| {
            c.choices(
                "Which CSS framework would you like to use?",
                STYLING_CHOICES,
                DEFAULT_STYLING,
            )
        })?;
        self.ask(&mut answers, "animations", |c| {
            c.choices(
                "Which animation library would you like to use?",
                ANIMATION_CHOICES,
                defaults::NONE_CHOICE,
            )
        })?;
        self.ask(&mut answers, "include_pages", |c| {
            c.confirm("Would you like to include multi-page routing?", false)
        })?;
        self.ask(&mut answers, "include_docker", |c| {
            c.confirm("Would you like to include a Dockerfile and docker-compose.yml?", true)
        })?;
        self.ask(&mut answers, "configure_pre_commit", |c| {
            c.confirm("Would you like to include baseline pre-commit hook configurations?", true)
        })?;
        self.ask(&mut answers, "port", |c| c.port())?;

        ProjectConfig::from_answers(answers)
    }

    /// Asks for `key` unless it was pre-supplied.
    fn ask(
        &self,
        answers: &mut Map<String, Value>,
        key: &str,
        question: impl FnOnce(&Self) -> Result<Value>,
    ) -> Result<()> {
        if answers.contains_key(key) {
            log::debug!("Using pre-supplied answer for `{key}`");
            return Ok(());
        }
        let value = question(self)?;
        answers.insert(key.to_string(), value);
        Ok(())
    }

    fn text(&self, prompt: &str, default: Option<String>) -> Result<Value> {
        if self.non_interactive {
            return Ok(Value::String(default.unwrap_or_default()));
        }
        let answer = self
            .prompter
            .prompt_text(&TextPromptConfig { prompt: prompt.to_string(), default })?;
        Ok(Value::String(answer))
    }

    fn email(&self) -> Result<Value> {
        if self.non_interactive {
            return Err(Error::ValidationError(
                "`author_email` has no default and must be supplied in non-interactive mode"
                    .into(),
            ));
        }
        loop {
            let email = self.prompter.prompt_text(&TextPromptConfig {
                prompt: "Author Email".to_string(),
                default: None,
            })?;
            if is_valid_email(&email) {
                return Ok(Value::String(email));
            }
            eprintln!("`{email}` is not a valid email address, please try again.");
        }
    }

    fn port(&self) -> Result<Value> {
        let default = defaults::PORT.to_string();
        if self.non_interactive {
            return Ok(Value::from(defaults::PORT));
        }
        loop {
            let answer = self.prompter.prompt_text(&TextPromptConfig {
                prompt: "What port would you like to run the application on?".to_string(),
                default: Some(default.clone()),
            })?;
            match parse_port(&Value::String(answer)) {
                Ok(port) => return Ok(Value::from(port)),
                Err(e) => eprintln!("{e}, please try again."),
            }
        }
    }

    /// Multi-select over `none` plus `catalogue`, with `default` preselected.
    fn choices(&self, prompt: &str, catalogue: &[&str], default: &str) -> Result<Value> {
        let choices: Vec<String> = std::iter::once(defaults::NONE_CHOICE)
            .chain(catalogue.iter().copied())
            .map(str::to_string)
            .collect();

        let selected: Vec<Value> = if self.non_interactive {
            vec![Value::String(default.to_string())]
        } else {
            let preselected = choices.iter().map(|c| c == default).collect();
            let indices = self.prompter.prompt_multiple_choice(&MultipleChoiceConfig {
                prompt: prompt.to_string(),
                choices: choices.clone(),
                defaults: preselected,
            })?;
            indices
                .into_iter()
                .filter_map(|i| choices.get(i))
                .map(|c| Value::String(c.clone()))
                .collect()
        };

        let normalized =
            normalize_choices(&Value::Array(selected)).map_err(Error::ValidationError)?;
        Ok(Value::from(normalized))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<Value> {
        if self.non_interactive {
            return Ok(Value::Bool(default));
        }
        let answer = self
            .prompter
            .prompt_confirmation(&ConfirmationConfig { prompt: prompt.to_string(), default })?;
        Ok(Value::Bool(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{ConfirmationPrompter, MultipleChoicePrompter, TextPrompter};
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Replays canned answers and records every prompt it was shown.
    #[derive(Default)]
    struct ScriptedPrompter {
        texts: RefCell<VecDeque<String>>,
        selections: RefCell<VecDeque<Vec<usize>>>,
        confirmations: RefCell<VecDeque<bool>>,
        asked: RefCell<Vec<String>>,
    }

    impl ScriptedPrompter {
        fn new(texts: &[&str], selections: Vec<Vec<usize>>, confirmations: &[bool]) -> Self {
            Self {
                texts: RefCell::new(texts.iter().map(|s| s.to_string()).collect()),
                selections: RefCell::new(selections.into()),
                confirmations: RefCell::new(confirmations.iter().copied().collect()),
                asked: RefCell::default(),
            }
        }
    }

    impl TextPrompter for ScriptedPrompter {
        fn prompt_text(&self, config: &TextPromptConfig) -> Result<String> {
            self.asked.borrow_mut().push(config.prompt.clone());
            Ok(self.texts.borrow_mut().pop_front().expect("unexpected text prompt"))
        }
    }

    impl MultipleChoicePrompter for ScriptedPrompter {
        fn prompt_multiple_choice(&self, config: &MultipleChoiceConfig) -> Result<Vec<usize>> {
            self.asked.borrow_mut().push(config.prompt.clone());
            Ok(self.selections.borrow_mut().pop_front().expect("unexpected choice prompt"))
        }
    }

    impl ConfirmationPrompter for ScriptedPrompter {
        fn prompt_confirmation(&self, config: &ConfirmationConfig) -> Result<bool> {
            self.asked.borrow_mut().push(config.prompt.clone());
            Ok(self.confirmations.borrow_mut().pop_front().expect("unexpected confirmation"))
        }
    }

    #[test]
    fn asks_every_question_in_order() {
        let prompter = ScriptedPrompter::new(
            &["sales", "Jane", "not-an-email", "jane@example.com", "Numbers", "abc", "8050"],
            // none(0) tailwind(1) bootstrap(2) ... / none(0) animate.css(1)
            vec![vec![2], vec![0]],
            &[true, false, true],
        );
        let config = AnswerCollector::new(&prompter, false).collect(Map::new()).unwrap();

        assert_eq!(config.project_name, "sales");
        assert_eq!(config.author_email, "jane@example.com");
        assert_eq!(config.styling, vec!["bootstrap"]);
        assert!(config.animations.is_empty());
        assert!(config.include_pages);
        assert!(!config.include_docker);
        assert!(config.configure_pre_commit);
        assert_eq!(config.port, 8050);
        assert!(config.include_tests);

        let asked = prompter.asked.borrow();
        assert_eq!(asked.iter().filter(|p| *p == "Author Email").count(), 2);
        assert_eq!(asked.last().map(String::as_str), Some(
            "What port would you like to run the application on?"
        ));
    }

    #[test]
    fn pre_supplied_answers_are_not_asked() {
        let prompter = ScriptedPrompter::new(&["Numbers"], vec![vec![0]], &[false]);
        let preset = json!({
            "project_name": "sales",
            "author_name": "Jane",
            "author_email": "jane@example.com",
            "styling": ["bulma"],
            "include_pages": true,
            "include_docker": true,
            "port": "9000",
        });
        let collector = AnswerCollector::new(&prompter, false);
        let config = collector.collect(preset.as_object().cloned().unwrap()).unwrap();

        assert_eq!(config.description, "Numbers");
        assert_eq!(config.styling, vec!["bulma"]);
        assert!(!config.configure_pre_commit);
        assert_eq!(config.port, 9000);
        assert_eq!(prompter.asked.borrow().len(), 3);
    }

    #[test]
    fn non_interactive_takes_defaults() {
        let prompter = ScriptedPrompter::default();
        let preset = json!({"author_email": "jane@example.com"});
        let config = AnswerCollector::new(&prompter, true)
            .collect(preset.as_object().cloned().unwrap())
            .unwrap();

        assert_eq!(config.project_name, "my-dash-app");
        assert_eq!(config.description, "A Dash application");
        assert_eq!(config.styling, vec!["tailwind"]);
        assert!(config.animations.is_empty());
        assert!(!config.include_pages);
        assert!(config.include_docker);
        assert_eq!(config.port, 8000);
        assert!(prompter.asked.borrow().is_empty());
    }

    #[test]
    fn non_interactive_requires_email() {
        let prompter = ScriptedPrompter::default();
        let result = AnswerCollector::new(&prompter, true).collect(Map::new());
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    #[test]
    fn reads_inline_and_file_answers() {
        let prompter = ScriptedPrompter::default();
        let collector = AnswerCollector::new(&prompter, true);

        let inline = collector.read_answers(Some(r#"{"port": 8050}"#), None).unwrap();
        assert_eq!(inline["port"], 8050);

        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("answers.json");
        std::fs::write(&file, r#"{"project_name": "sales"}"#).unwrap();
        let from_file = collector.read_answers(None, Some(&file)).unwrap();
        assert_eq!(from_file["project_name"], "sales");

        assert!(collector.read_answers(None, None).unwrap().is_empty());
        assert!(collector.read_answers(Some("[]"), None).is_err());
    }
}

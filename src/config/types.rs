//! The project configuration record and its field-level helpers

use crate::constants::{defaults, CURRENT_DIR};
use crate::error::{Error, Result};
use crate::renderer::to_snake_case;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// CSS frameworks offered by the styling prompt.
pub const STYLING_CHOICES: &[&str] =
    &["tailwind", "bootstrap", "bulma", "daisyui", "unocss", "windi"];

/// Animation libraries offered by the animations prompt.
pub const ANIMATION_CHOICES: &[&str] =
    &["animate.css", "animejs", "scrollreveal", "animatecss", "motion"];

/// Validated user choices driving the generation.
///
/// Built once from collected answers and never mutated afterwards; the
/// generator derives a renamed copy when the current directory is initialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub project_name: String,
    pub author_name: String,
    pub author_email: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_choices")]
    pub styling: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_choices")]
    pub animations: Vec<String>,
    #[serde(default)]
    pub include_pages: bool,
    #[serde(default = "default_true")]
    pub include_tests: bool,
    #[serde(default)]
    pub include_auth: bool,
    #[serde(default)]
    pub include_database: bool,
    #[serde(default = "default_true")]
    pub include_docker: bool,
    #[serde(default = "default_true")]
    pub configure_pre_commit: bool,
    #[serde(default = "default_port", deserialize_with = "deserialize_port")]
    pub port: u16,
}

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    defaults::PORT
}

fn deserialize_choices<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    normalize_choices(&value).map_err(serde::de::Error::custom)
}

fn deserialize_port<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    parse_port(&value).map_err(serde::de::Error::custom)
}

/// Normalizes a styling/animations answer into a list of selections.
///
/// Accepts a single string or a list of strings. `none` is dropped, so a list
/// holding only `none` (or nothing at all) becomes empty.
pub fn normalize_choices(value: &Value) -> std::result::Result<Vec<String>, String> {
    let items: Vec<&Value> = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut selected = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) if s == defaults::NONE_CHOICE || s.is_empty() => {}
            Value::String(s) => selected.push(s.clone()),
            other => return Err(format!("expected a string choice, got `{other}`")),
        }
    }
    Ok(selected)
}

/// Parses a port answer given either as a number or as a numeric string.
pub fn parse_port(value: &Value) -> std::result::Result<u16, String> {
    let port = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u16::try_from(n).ok()),
        Value::String(s) => s.trim().parse::<u16>().ok(),
        _ => None,
    };
    match port {
        Some(port) if port > 0 => Ok(port),
        _ => Err(format!("`{value}` is not a valid port (1-65535)")),
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"[^@]+@[^@]+\.[^@]+").expect("valid email regex"))
}

/// Loose email check: something before an `@` and a dotted domain after it.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email_regex().is_match(email)
}

/// Lower-cases a name and folds `-` and spaces into `_` for loose comparison.
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(['-', ' '], "_")
}

impl ProjectConfig {
    /// Builds a configuration from an answers map and validates it.
    ///
    /// Unknown keys are ignored; missing required keys are reported as a
    /// validation error naming the field.
    pub fn from_answers(answers: Map<String, Value>) -> Result<Self> {
        let config: ProjectConfig = serde_json::from_value(Value::Object(answers))
            .map_err(|e| Error::ValidationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let name = self.project_name.trim();
        if name.is_empty() {
            return Err(Error::ValidationError("project name must not be empty".into()));
        }
        if name != CURRENT_DIR
            && (name == ".." || name.contains('/') || name.contains('\\'))
        {
            return Err(Error::ValidationError(format!(
                "project name `{name}` must be a plain directory name"
            )));
        }
        if !is_valid_email(&self.author_email) {
            return Err(Error::ValidationError(format!(
                "`{}` is not a valid email address",
                self.author_email
            )));
        }
        if self.port == 0 {
            return Err(Error::ValidationError("port must be greater than zero".into()));
        }
        Ok(())
    }

    /// Whether the project is generated into the current working directory.
    pub fn targets_current_dir(&self) -> bool {
        self.project_name == CURRENT_DIR
    }

    /// Console-script style name: lower-case with `-` separators.
    pub fn slug(&self) -> String {
        self.project_name.to_lowercase().replace([' ', '_'], "-")
    }

    /// Python package style name.
    pub fn package_name(&self) -> String {
        to_snake_case(&self.project_name)
    }

    pub fn wants_tailwind(&self) -> bool {
        self.styling.iter().any(|s| s == "tailwind")
    }

    /// Returns a copy carrying a different project name.
    pub fn renamed(&self, project_name: impl Into<String>) -> Self {
        Self { project_name: project_name.into(), ..self.clone() }
    }
}

use super::filters::*;
use crate::{error::Result, renderer::interface::TemplateRenderer};
use chrono::Datelike;
use minijinja::{AutoEscape, Environment, ErrorKind};
use serde_json::json;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
    /// Default context that will be merged with any provided context
    default_context: serde_json::Value,
}

/// Template extensions stripped before picking the auto-escape mode.
const TEMPLATE_SUFFIXES: &[&str] = &[".jinja", ".jinja2", ".j2"];

/// HTML-escape only markup outputs; Python, TOML, YAML and the rest render verbatim.
fn auto_escape_for(name: &str) -> AutoEscape {
    let inner = TEMPLATE_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name);
    match inner.rsplit('.').next() {
        Some("html" | "htm" | "xml") => AutoEscape::Html,
        _ => AutoEscape::None,
    }
}

/// Resolves `name` against each directory in order, first hit wins.
fn load_from_search_path(
    search_path: &[PathBuf],
    name: &str,
) -> std::result::Result<Option<String>, minijinja::Error> {
    let relative = Path::new(name);
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return Ok(None);
    }

    for dir in search_path {
        let candidate = dir.join(relative);
        if candidate.is_file() {
            return fs::read_to_string(&candidate).map(Some).map_err(|e| {
                minijinja::Error::new(
                    ErrorKind::InvalidOperation,
                    format!("could not read template '{}'", candidate.display()),
                )
                .with_source(e)
            });
        }
    }
    Ok(None)
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        let default_context = json!({
            "platform": {
                "os": std::env::consts::OS,
                "family": std::env::consts::FAMILY,
                "arch": std::env::consts::ARCH,
            },
            "year": chrono::Local::now().year(),
        });

        env.set_trim_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(auto_escape_for);

        // Add all the custom filters
        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("train_case", to_train_case);
        env.add_filter("regex", regex_filter);

        Self { env, default_context }
    }

    /// Creates a renderer whose named templates are loaded from `search_path`.
    ///
    /// Directories are searched in the order given, so shared root templates
    /// listed first shadow variant templates with the same relative name.
    pub fn with_search_path(search_path: Vec<PathBuf>) -> Self {
        let mut renderer = Self::new();
        log::debug!("Template search path: {search_path:?}");
        renderer
            .env
            .set_loader(move |name| load_from_search_path(&search_path, name));
        renderer
    }

    /// Merges the default context with the provided context
    fn merge_context(&self, context: &serde_json::Value) -> serde_json::Value {
        if let (Some(default_obj), Some(context_obj)) =
            (self.default_context.as_object(), context.as_object())
        {
            let mut result = default_obj.clone();
            for (key, value) in context_obj {
                result.insert(key.clone(), value.clone());
            }
            json!(result)
        } else {
            // If either isn't an object, just use the provided context
            context.clone()
        }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let mut env = self.env.clone();
        let name = template_name.unwrap_or("temp");
        env.add_template_owned(name.to_string(), template.to_string())?;
        let tmpl = env.get_template(name)?;
        Ok(tmpl.render(self.merge_context(context))?)
    }

    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        // Normalize the template name for cross-platform compatibility
        let normalized_name = name.replace('\\', "/");
        let tmpl = self.env.get_template(&normalized_name)?;
        Ok(tmpl.render(self.merge_context(context))?)
    }

    fn has_template(&self, name: &str) -> Result<bool> {
        match self.env.get_template(&name.replace('\\', "/")) {
            Ok(_) => Ok(true),
            Err(e) if matches!(e.kind(), ErrorKind::TemplateNotFound) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

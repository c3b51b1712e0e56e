use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

use super::operation::TemplateOperation;
use super::skip::find_skip_rule;
use super::walker::TemplateEntry;

/// Builds the rendering context: every configuration field plus derived names.
pub fn template_context(config: &ProjectConfig) -> Result<Value> {
    let mut context = serde_json::to_value(config)?;
    if let Value::Object(map) = &mut context {
        map.insert("project_slug".into(), Value::String(config.slug()));
        map.insert("package_name".into(), Value::String(config.package_name()));
    }
    Ok(context)
}

pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,
    config: &'a ProjectConfig,

    /// Other
    project_root: PathBuf,
    context: Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        project_root: impl AsRef<Path>,
        config: &'a ProjectConfig,
    ) -> Result<Self> {
        Ok(Self {
            engine,
            config,
            project_root: project_root.as_ref().to_path_buf(),
            context: template_context(config)?,
        })
    }

    /// Picks the name the renderer knows this template by.
    ///
    /// The path relative to the tier root is tried first; the bare file name is
    /// the fallback for templates the search path cannot resolve by path.
    fn resolve_template_name(&self, entry: &TemplateEntry) -> Result<String> {
        let relative = entry.template_name()?;
        if self.engine.has_template(&relative)? {
            return Ok(relative);
        }

        let file_name = entry.file_name();
        if self.engine.has_template(&file_name)? {
            log::debug!("Falling back to file name lookup for '{relative}'");
            return Ok(file_name);
        }

        Err(Error::ProcessError {
            source_path: entry.source.display().to_string(),
            e: "template could not be resolved by path or file name".to_string(),
        })
    }

    /// Processes a template entry and determines the appropriate operation.
    ///
    /// # Arguments
    /// * `entry` - The template entry to process
    ///
    /// # Returns
    /// * `Result<TemplateOperation>` - The operation to perform
    pub fn process(&self, entry: &TemplateEntry) -> Result<TemplateOperation> {
        if let Some(rule) = find_skip_rule(&entry.file_name(), self.config) {
            return Ok(TemplateOperation::Skip {
                source: entry.source.clone(),
                feature: rule.feature,
            });
        }

        let name = self.resolve_template_name(entry)?;
        let content = self.engine.render_named(&name, &self.context)?;

        Ok(TemplateOperation::Write {
            source: entry.source.clone(),
            target: entry.target(&self.project_root),
            content,
        })
    }
}

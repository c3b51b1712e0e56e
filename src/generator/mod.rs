//! Project generation: lays out the target directory, renders every template
//! into it and hands the result to the post-processing steps.

mod layout;

pub use layout::ProjectLayout;

use std::path::Path;

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::ioutils::write_file;
use crate::loader::LoadedTemplates;
use crate::postprocess;
use crate::renderer::MiniJinjaRenderer;
use crate::template::{TemplateOperation, TemplateProcessor, TemplateWalker};

#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Plan and log every operation without touching the filesystem.
    pub dry_run: bool,
    /// Leave out the `uv`/`npm` shell-outs.
    pub skip_install: bool,
}

pub struct ProjectGenerator<'a> {
    templates: &'a LoadedTemplates,
    options: GenerateOptions,
}

impl<'a> ProjectGenerator<'a> {
    pub fn new(templates: &'a LoadedTemplates, options: GenerateOptions) -> Self {
        Self { templates, options }
    }

    /// Generates the project described by `config` inside `parent`.
    ///
    /// A failure while laying out or rendering rolls back whatever this run
    /// created before the error is returned. Post-processing failures are
    /// only warnings.
    ///
    /// # Returns
    /// * `Result<ProjectLayout>` - Where the project was generated
    pub fn generate(&self, config: &ProjectConfig, parent: &Path) -> Result<ProjectLayout> {
        let mut layout = ProjectLayout::resolve(&config.project_name, parent);
        let config = layout.effective_config(config);

        if let Err(e) = self.materialize_and_render(&mut layout, &config) {
            log::error!("❌ Error creating project: {e}");
            layout.rollback();
            return Err(e);
        }

        if self.options.dry_run {
            log::info!("[DRY RUN] Skipping post-processing");
        } else {
            postprocess::run_all(layout.root(), &config, !self.options.skip_install);
        }

        println!("✅ Successfully created {}", layout.display_name());
        Ok(layout)
    }

    fn materialize_and_render(
        &self,
        layout: &mut ProjectLayout,
        config: &ProjectConfig,
    ) -> Result<()> {
        layout.materialize(self.options.dry_run)?;

        let engine = MiniJinjaRenderer::with_search_path(self.templates.search_path());
        let processor = TemplateProcessor::new(&engine, layout.root(), config)?;
        let walker = TemplateWalker::new(self.templates.base(), self.templates.variant());

        for entry in walker.entries()? {
            let operation = processor.process(&entry)?;
            self.apply(&operation)?;
            log::info!("{}", operation.get_message(self.options.dry_run));
        }

        log::info!("✅ Successfully generated template files!");
        Ok(())
    }

    fn apply(&self, operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling template operation: {operation:?}");
        match operation {
            TemplateOperation::Write { .. } if self.options.dry_run => Ok(()),
            TemplateOperation::Write { target, content, .. } => {
                write_file(content, target).inspect_err(|e| {
                    log::error!("Failed to {}: {e}", operation.error_context())
                })
            }
            TemplateOperation::Skip { .. } => Ok(()),
        }
    }
}

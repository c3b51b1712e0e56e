use crate::{
    cli::{answers::AnswerCollector, Args},
    config::ProjectConfig,
    constants::CURRENT_DIR,
    error::{Error, Result},
    generator::{GenerateOptions, ProjectGenerator},
    loader::{get_templates, TemplateSource},
    next_steps::render_next_steps,
    preflight,
    prompt::{confirm, DialoguerPrompter, PromptProvider},
};
use std::path::{Path, PathBuf};

const NESTED_PROJECT_WARNING: &str = "
⚠️  WARNING: You appear to be running this command from inside a project directory.
This may create a nested project structure.

Run create-dash-app from the parent directory where you want your project created,
or point it there with `--output-dir`.
";

/// Main CLI runner that orchestrates the entire project generation workflow
pub struct Runner<'a> {
    args: Args,
    prompter: &'a dyn PromptProvider,
}

impl<'a> Runner<'a> {
    pub fn new(args: Args, prompter: &'a dyn PromptProvider) -> Self {
        Self { args, prompter }
    }

    /// Executes the complete project generation workflow
    pub fn run(self) -> Result<()> {
        let parent = self.parent_dir()?;

        self.warn_if_inside_project(&parent)?;

        let config = self.collect_config()?;
        let config = self.offer_current_dir(&parent, config)?;
        preflight::ensure_target_absent(&parent, &config.project_name)?;

        println!(
            "Your Project Configuration:\n\n{}\n\n",
            serde_json::to_string_pretty(&config)?
        );

        let source = TemplateSource::from_option(self.args.templates.clone());
        let templates = get_templates(&source, &self.args.variant)?;

        let options =
            GenerateOptions { dry_run: self.args.dry_run, skip_install: self.args.skip_install };
        let layout = ProjectGenerator::new(&templates, options).generate(&config, &parent)?;

        print!("{}", render_next_steps(&layout, &config));
        Ok(())
    }

    /// The directory the project is created in, absolute when it exists so
    /// that `.` still has a name.
    fn parent_dir(&self) -> Result<PathBuf> {
        let parent = &self.args.output_dir;
        if parent.is_dir() {
            Ok(std::fs::canonicalize(parent)?)
        } else {
            Ok(parent.clone())
        }
    }

    fn warn_if_inside_project(&self, parent: &Path) -> Result<()> {
        if !preflight::looks_like_project_dir(parent) {
            return Ok(());
        }
        if self.args.non_interactive {
            log::warn!("'{}' looks like a project directory", parent.display());
            return Ok(());
        }
        println!("{NESTED_PROJECT_WARNING}");
        if !confirm(self.prompter, "Continue anyway?", false)? {
            return Err(Error::Aborted);
        }
        Ok(())
    }

    /// Collects answers from all available sources
    fn collect_config(&self) -> Result<ProjectConfig> {
        let collector = AnswerCollector::new(self.prompter, self.args.non_interactive);
        let preset = collector
            .read_answers(self.args.answers.as_deref(), self.args.answers_file.as_deref())?;
        collector.collect(preset)
    }

    /// Offers to generate into `parent` itself when it is an empty directory
    /// named after the project.
    fn offer_current_dir(&self, parent: &Path, config: ProjectConfig) -> Result<ProjectConfig> {
        if self.args.non_interactive || config.targets_current_dir() || !parent.is_dir() {
            return Ok(config);
        }
        if !preflight::can_init_current_dir(parent, &config.project_name)? {
            return Ok(config);
        }

        let dir_name = parent
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let prompt = format!(
            "📁 You're in a directory named '{dir_name}' and want to create '{}'.\n\
             Would you like to initialize the current directory instead of creating a nested one?",
            config.project_name
        );
        if confirm(self.prompter, prompt, true)? {
            let renamed = config.renamed(CURRENT_DIR);
            renamed.validate()?;
            return Ok(renamed);
        }
        Ok(config)
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    Runner::new(args, &prompter).run()
}

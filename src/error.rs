use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to walk the template tree. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Prompt failed: {0}.")]
    PromptError(#[from] dialoguer::Error),

    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error(
        "Project `{project_name}` already exists! Please choose a different project name, \
         run create-dash-app in a different directory, or delete the existing project first."
    )]
    ProjectExistsError { project_name: String },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot proceed: template variant '{variant}' was not found in '{template_dir}'.")]
    VariantNotFoundError { variant: String, template_dir: String },

    #[error("Cannot process the template: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },

    /// A shell-out finished with a non-zero status.
    #[error("Command `{command}` failed with status {status}: {stderr}")]
    CommandFailedError { command: String, status: std::process::ExitStatus, stderr: String },

    /// The user declined to continue. Not a failure.
    #[error("Cancelled.")]
    Aborted,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// `Error::Aborted` prints the cancellation notice and exits with status 0,
/// every other error exits with status 1.
pub fn default_error_handler(err: Error) {
    use crate::constants::exit_codes;

    if matches!(err, Error::Aborted) {
        println!("{err}");
        std::process::exit(exit_codes::SUCCESS);
    }
    eprintln!("\n\n‼️ ERROR! {err}\n");
    std::process::exit(exit_codes::FAILURE);
}

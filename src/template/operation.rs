use std::path::PathBuf;

#[derive(Debug)]
pub enum TemplateOperation {
    Write { source: PathBuf, target: PathBuf, content: String },
    Skip { source: PathBuf, feature: &'static str },
}

impl TemplateOperation {
    /// Returns the target path for this operation, used for error context.
    pub fn target_path(&self) -> Option<&PathBuf> {
        match self {
            TemplateOperation::Write { target, .. } => Some(target),
            TemplateOperation::Skip { .. } => None,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::Write { source, target, .. } => {
                format!("render '{}' -> '{}'", source.display(), target.display())
            }
            TemplateOperation::Skip { source, .. } => {
                format!("skip '{}'", source.display())
            }
        }
    }

    /// Gets a message describing the operation.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            TemplateOperation::Write { target, .. } => {
                format!("{}Writing to '{}'", prefix, target.display())
            }
            TemplateOperation::Skip { source, feature } => {
                format!(
                    "{}Skipping '{}' (`{}` is disabled)",
                    prefix,
                    source.display(),
                    feature
                )
            }
        }
    }
}

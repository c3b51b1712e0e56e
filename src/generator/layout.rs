use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::constants::{CURRENT_DIR, PAGES_DIR, SOURCE_DIR};
use crate::error::{Error, Result};
use crate::ioutils::create_dir_all;

/// Where the project lands on disk and what this run created there.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    display_name: String,
    in_current_dir: bool,
    created: bool,
}

impl ProjectLayout {
    /// Resolves `project_name` against `parent`.
    ///
    /// `.` is `parent` itself, named after its final path component; any
    /// other name is a new directory under `parent`.
    pub fn resolve(project_name: &str, parent: &Path) -> Self {
        if project_name == CURRENT_DIR {
            let display_name = parent
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| CURRENT_DIR.to_string());
            Self {
                root: parent.to_path_buf(),
                display_name,
                in_current_dir: true,
                created: false,
            }
        } else {
            Self {
                root: parent.join(project_name),
                display_name: project_name.to_string(),
                in_current_dir: false,
                created: false,
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Effective project name, the directory name when generating into `.`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn in_current_dir(&self) -> bool {
        self.in_current_dir
    }

    /// The configuration templates see: `.` is replaced by the directory name.
    pub fn effective_config(&self, config: &ProjectConfig) -> ProjectConfig {
        if self.in_current_dir {
            config.renamed(&self.display_name)
        } else {
            config.clone()
        }
    }

    /// Creates the project root and `src/pages`.
    ///
    /// An existing root is refused unless it is the current directory. In
    /// dry-run mode nothing is created but the refusal still applies.
    pub fn materialize(&mut self, dry_run: bool) -> Result<()> {
        if self.in_current_dir {
            log::info!("Initializing current directory: {}", self.display_name);
        } else {
            if self.root.exists() {
                return Err(Error::ProjectExistsError {
                    project_name: self.display_name.clone(),
                });
            }
            if dry_run {
                log::info!("[DRY RUN] Would create project directory: {}", self.display_name);
            } else {
                create_dir_all(&self.root)?;
                self.created = true;
                log::info!("Created project directory: {}", self.display_name);
            }
        }

        if dry_run {
            log::info!("[DRY RUN] Would create `{PAGES_DIR}/` directory");
        } else {
            create_dir_all(self.root.join(SOURCE_DIR).join(PAGES_DIR))?;
            log::info!("Created `{PAGES_DIR}/` directory");
        }
        Ok(())
    }

    /// Removes what this run created after a failure.
    ///
    /// Only a root created by `materialize` is deleted. The current directory
    /// is left alone with a warning.
    pub fn rollback(&mut self) {
        if self.in_current_dir {
            log::warn!(
                "Note: Current directory was being initialized. Manual cleanup may be needed."
            );
            return;
        }
        if !self.created {
            return;
        }
        match std::fs::remove_dir_all(&self.root) {
            Ok(()) => {
                self.created = false;
                log::info!(
                    "Removed partially created project directory: {}",
                    self.display_name
                );
            }
            Err(e) => log::error!(
                "Failed to remove partially created project directory '{}': {e}",
                self.root.display()
            ),
        }
    }
}

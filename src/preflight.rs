//! Checks run against the working directory before anything is generated

use crate::config::normalize_name;
use crate::constants::{CURRENT_DIR, IGNORED_WHEN_EMPTY, PROJECT_INDICATORS};
use crate::error::{Error, Result};
use std::path::Path;

/// Whether `cwd` already looks like a Python project, which would make the
/// generated project a nested one.
pub fn looks_like_project_dir(cwd: &Path) -> bool {
    PROJECT_INDICATORS.iter().any(|indicator| cwd.join(indicator).exists())
}

/// Whether the project could be generated straight into `cwd`.
///
/// True when the directory name matches `project_name` (ignoring case, `-`,
/// `_` and spaces) and the directory is empty apart from `.venv` and `.git`.
pub fn can_init_current_dir(cwd: &Path, project_name: &str) -> Result<bool> {
    let Some(dir_name) = cwd.file_name() else {
        return Ok(false);
    };
    if normalize_name(&dir_name.to_string_lossy()) != normalize_name(project_name) {
        return Ok(false);
    }

    for entry in std::fs::read_dir(cwd)? {
        let name = entry?.file_name();
        if !IGNORED_WHEN_EMPTY.iter().any(|ignored| name == *ignored) {
            log::debug!("'{}' is not empty: found '{}'", cwd.display(), name.to_string_lossy());
            return Ok(false);
        }
    }
    Ok(true)
}

/// Fails when a project named `project_name` already exists in `parent`.
///
/// Generating into the current directory (`.`) is never rejected here.
pub fn ensure_target_absent(parent: &Path, project_name: &str) -> Result<()> {
    if project_name != CURRENT_DIR && parent.join(project_name).exists() {
        return Err(Error::ProjectExistsError { project_name: project_name.to_string() });
    }
    Ok(())
}

//! Post-generation shell-outs to external package managers
//!
//! Nothing in here is fatal: every failure is reported as a warning and the
//! generated project is kept.

pub mod permissions;
pub mod tailwind;
pub mod uv;

use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Runs external programs inside the generated project.
pub struct CommandRunner<'a> {
    cwd: &'a Path,
}

impl<'a> CommandRunner<'a> {
    pub fn new(cwd: &'a Path) -> Self {
        Self { cwd }
    }

    /// Whether `program` can be found on `PATH`.
    pub fn is_available(program: &str) -> bool {
        which::which(program).is_ok()
    }

    /// Runs `program` with `args`, capturing its output.
    ///
    /// # Returns
    /// * `Result<String>` - Captured stdout on success, `Error::CommandFailedError`
    ///   carrying stderr on a non-zero exit
    pub fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        log::debug!("Running `{command}` in '{}'", self.cwd.display());

        let output = Command::new(program).args(args).current_dir(self.cwd).output()?;
        if !output.status.success() {
            return Err(Error::CommandFailedError {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Runs every post-processing step for the generated project.
///
/// With `install` unset the `npm` and `uv` shell-outs are left out.
pub fn run_all(project_root: &Path, config: &ProjectConfig, install: bool) {
    if install {
        if let Err(e) = tailwind::setup(project_root, config) {
            log::warn!("⚠️  Warning: Tailwind CSS setup failed: {e}");
        }
        if let Err(e) = uv::sync(project_root) {
            log::warn!("⚠️  Warning: uv sync failed: {e}");
        }
    } else {
        log::info!("Skipping dependency installation (--skip-install)");
    }
    if let Err(e) = permissions::make_scripts_executable(project_root) {
        log::warn!("⚠️  Warning: could not mark scripts executable: {e}");
    }
}

use super::CommandRunner;
use crate::error::Result;
use std::path::Path;

pub const UV: &str = "uv";

/// Locks and installs the generated project's dependencies with `uv`.
///
/// Runs `uv sync`, then installs the project in editable mode so its console
/// script is on the virtualenv's `PATH`.
pub fn sync(project_root: &Path) -> Result<()> {
    if !project_root.join("pyproject.toml").is_file() {
        log::warn!("⚠️  pyproject.toml not found, skipping uv sync");
        return Ok(());
    }
    if !CommandRunner::is_available(UV) {
        log::warn!(
            "⚠️  Warning: uv command not found. Please install uv and run 'uv sync' manually."
        );
        return Ok(());
    }

    let runner = CommandRunner::new(project_root);
    log::info!("Running uv sync to generate lock file and install dependencies ...");
    runner.run(UV, &["sync"])?;
    log::info!("Installing package in editable mode for console scripts ...");
    runner.run(UV, &["pip", "install", "-e", "."])?;
    log::info!("✅ Successfully generated uv.lock and installed dependencies");
    Ok(())
}

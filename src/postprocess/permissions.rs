use crate::error::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Marks generated shell scripts as executable.
#[cfg(unix)]
pub fn make_scripts_executable(project_root: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    for entry in WalkDir::new(project_root) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !path.extension().is_some_and(|ext| ext == "sh") {
            continue;
        }
        let mut permissions = std::fs::metadata(path)?.permissions();
        permissions.set_mode(permissions.mode() | 0o111);
        std::fs::set_permissions(path, permissions)?;
        log::debug!("Marked '{}' executable", path.display());
    }
    Ok(())
}

#[cfg(not(unix))]
pub fn make_scripts_executable(_project_root: &Path) -> Result<()> {
    Ok(())
}

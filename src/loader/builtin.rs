use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};

/// Template tree compiled into the binary.
#[derive(RustEmbed)]
#[folder = "templates"]
struct BuiltinTemplates;

/// Extracts the embedded template tree into a directory so it can be walked
/// like any other local template tree.
pub struct BuiltinLoader<P: AsRef<Path>> {
    destination: P,
}

impl<P: AsRef<Path>> BuiltinLoader<P> {
    pub fn new(destination: P) -> Self {
        Self { destination }
    }
}

impl<P: AsRef<Path>> TemplateLoader for BuiltinLoader<P> {
    fn load(&self) -> Result<PathBuf> {
        let destination = self.destination.as_ref();
        for relative in BuiltinTemplates::iter() {
            let file = BuiltinTemplates::get(&relative).ok_or_else(|| {
                Error::TemplateError(format!("embedded template `{relative}` missing"))
            })?;
            let target = destination.join(&*relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, file.data.as_ref())?;
            log::trace!("Extracted builtin template '{}'", target.display());
        }
        Ok(destination.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn extracts_shared_and_basic_templates() {
        let dir = TempDir::new().unwrap();
        let root = BuiltinLoader::new(dir.path()).load().unwrap();
        assert!(root.join("pyproject.toml.jinja").is_file());
        assert!(root.join(".env.development.jinja").is_file());
        assert!(root.join("basic").join("app.py.jinja").is_file());
        assert_eq!(BuiltinTemplates::iter().count(), walk_count(&root));
    }

    fn walk_count(root: &Path) -> usize {
        walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .count()
    }
}

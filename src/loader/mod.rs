use crate::error::{Error, Result};
use crate::loader::interface::TemplateLoader;
use crate::loader::{builtin::BuiltinLoader, local::LocalLoader};
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

pub mod builtin;
pub mod interface;
pub mod local;

#[derive(Debug, Clone)]
pub enum TemplateSource {
    /// Templates embedded in the binary
    Builtin,
    /// Local filesystem template path
    FileSystem(PathBuf),
}

impl TemplateSource {
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(TemplateSource::Builtin, TemplateSource::FileSystem)
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Builtin => write!(f, "builtin templates"),
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

/// A template tree ready to be walked.
///
/// Builtin templates are extracted into a temporary directory owned by this
/// value and removed when it is dropped.
#[derive(Debug)]
pub struct LoadedTemplates {
    base: PathBuf,
    variant: PathBuf,
    _scratch: Option<TempDir>,
}

impl LoadedTemplates {
    /// Root of the template tree; shared root templates live directly here.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Directory of the selected variant, `<base>/<variant>`.
    pub fn variant(&self) -> &Path {
        &self.variant
    }

    /// Renderer search path: shared templates first, then the variant.
    pub fn search_path(&self) -> Vec<PathBuf> {
        vec![self.base.clone(), self.variant.clone()]
    }
}

/// Loads the template tree for `source` and selects `variant` in it.
///
/// # Arguments
/// * `source` - Where the templates come from
/// * `variant` - Name of the variant subdirectory, e.g. `basic`
///
/// # Returns
/// * `Result<LoadedTemplates>` - Base and variant paths of the tree
pub fn get_templates(source: &TemplateSource, variant: &str) -> Result<LoadedTemplates> {
    log::debug!("Loading templates from {source}");
    let (base, scratch) = match source {
        TemplateSource::Builtin => {
            let scratch = TempDir::new()?;
            let base = BuiltinLoader::new(scratch.path()).load()?;
            (base, Some(scratch))
        }
        TemplateSource::FileSystem(path) => (LocalLoader::new(path).load()?, None),
    };

    let variant_dir = base.join(variant);
    if !is_single_component(variant) || !variant_dir.is_dir() {
        return Err(Error::VariantNotFoundError {
            variant: variant.to_string(),
            template_dir: base.display().to_string(),
        });
    }

    Ok(LoadedTemplates { base, variant: variant_dir, _scratch: scratch })
}

/// A variant names exactly one directory directly below the template root.
fn is_single_component(variant: &str) -> bool {
    let mut components = Path::new(variant).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_template_source_display() {
        assert_eq!(format!("{}", TemplateSource::Builtin), "builtin templates");
        let fs_source = TemplateSource::FileSystem(PathBuf::from("/path/to/templates"));
        assert_eq!(format!("{fs_source}"), "local path: '/path/to/templates'");
    }

    #[test]
    fn from_option_prefers_explicit_path() {
        assert!(matches!(TemplateSource::from_option(None), TemplateSource::Builtin));
        assert!(matches!(
            TemplateSource::from_option(Some(PathBuf::from("t"))),
            TemplateSource::FileSystem(_)
        ));
    }

    #[test]
    fn local_templates_require_the_variant() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("basic")).unwrap();
        let source = TemplateSource::FileSystem(dir.path().to_path_buf());

        let loaded = get_templates(&source, "basic").unwrap();
        assert_eq!(loaded.base(), dir.path());
        assert_eq!(loaded.variant(), dir.path().join("basic"));

        assert!(matches!(
            get_templates(&source, "advanced"),
            Err(Error::VariantNotFoundError { .. })
        ));
    }

    #[test]
    fn variant_must_be_a_single_directory_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("basic/nested")).unwrap();
        let source = TemplateSource::FileSystem(dir.path().join("basic"));

        for variant in [".", "..", "../basic", "nested/..", "/tmp", ""] {
            assert!(
                matches!(
                    get_templates(&source, variant),
                    Err(Error::VariantNotFoundError { .. })
                ),
                "variant {variant:?} was accepted"
            );
        }
        assert!(get_templates(&source, "nested").is_ok());
    }

    #[test]
    fn builtin_templates_live_until_dropped() {
        let loaded = get_templates(&TemplateSource::Builtin, "basic").unwrap();
        let base = loaded.base().to_path_buf();
        assert!(base.join("basic").is_dir());
        drop(loaded);
        assert!(!base.exists());
    }
}

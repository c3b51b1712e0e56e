use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::SOURCE_DIR;
use crate::error::Result;
use crate::ext::PathExt;

/// Which half of the two-tier template tree an entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateTier {
    /// Shared file directly inside the templates root; rendered into the project root.
    Root,
    /// File under `<templates>/<variant>/`; rendered under the project's `src/`.
    Variant,
}

/// A single template file discovered by the walker.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    /// Absolute path of the template file
    pub source: PathBuf,
    /// Path relative to the tier's own root
    pub relative: PathBuf,
    pub tier: TemplateTier,
}

impl TemplateEntry {
    /// The template's file name as written in the template tree.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Name under which the renderer resolves this template.
    pub fn template_name(&self) -> Result<String> {
        self.relative.to_template_name()
    }

    /// Output file name: the template name minus a trailing `.jinja`.
    pub fn output_name(&self) -> OsString {
        let name = if self.source.is_jinja_template() {
            self.source.file_stem()
        } else {
            self.source.file_name()
        };
        name.map(OsString::from).unwrap_or_default()
    }

    /// Resolves where this template lands inside `project_root`.
    ///
    /// Root templates go to the project root. Variant templates go to
    /// `src/`, mirroring their directory relative to the variant root.
    pub fn target(&self, project_root: &Path) -> PathBuf {
        let target_dir = match self.tier {
            TemplateTier::Root => project_root.to_path_buf(),
            TemplateTier::Variant => {
                let parent = self.relative.parent().unwrap_or_else(|| Path::new(""));
                project_root.join(SOURCE_DIR).join(parent)
            }
        };
        target_dir.join(self.output_name())
    }
}

/// Enumerates the shared root templates and the selected variant's templates.
pub struct TemplateWalker<'a> {
    base: &'a Path,
    variant: &'a Path,
}

impl<'a> TemplateWalker<'a> {
    pub fn new(base: &'a Path, variant: &'a Path) -> Self {
        Self { base, variant }
    }

    /// Hidden files only take part when they are Jinja templates,
    /// e.g. `.env.development.jinja`.
    fn is_eligible(path: &Path) -> bool {
        !path.is_hidden() || path.is_jinja_template()
    }

    /// Lists every template in processing order: root entries first, then
    /// variant entries, each sorted by path.
    pub fn entries(&self) -> Result<Vec<TemplateEntry>> {
        let mut entries = self.collect(self.base, TemplateTier::Root, Some(1))?;
        entries.extend(self.collect(self.variant, TemplateTier::Variant, None)?);
        log::debug!(
            "Discovered {} template(s) in '{}' and '{}'",
            entries.len(),
            self.base.display(),
            self.variant.display()
        );
        Ok(entries)
    }

    fn collect(
        &self,
        root: &Path,
        tier: TemplateTier,
        max_depth: Option<usize>,
    ) -> Result<Vec<TemplateEntry>> {
        let mut walker = WalkDir::new(root).min_depth(1).sort_by_file_name();
        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }

        let mut entries = Vec::new();
        for dir_entry in walker {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }
            if !Self::is_eligible(path) {
                log::debug!("Ignoring hidden non-template file '{}'", path.display());
                continue;
            }
            let relative = path.strip_prefix(root).map_err(|e| {
                crate::error::Error::ProcessError {
                    source_path: path.display().to_string(),
                    e: e.to_string(),
                }
            })?;
            entries.push(TemplateEntry {
                source: path.to_path_buf(),
                relative: relative.to_path_buf(),
                tier,
            });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// The template structure
    /// templates/
    ///   README.md.jinja
    ///   .env.development.jinja
    ///   .gitignore
    ///   basic/
    ///     app.py.jinja
    ///     pages/home.py.jinja
    ///     .hidden
    fn template_tree() -> TempDir {
        let root = TempDir::new().unwrap();
        let base = root.path();
        fs::write(base.join("README.md.jinja"), "# {{ project_name }}").unwrap();
        fs::write(base.join(".env.development.jinja"), "PORT={{ port }}").unwrap();
        fs::write(base.join(".gitignore"), "*.pyc").unwrap();
        fs::create_dir_all(base.join("basic/pages")).unwrap();
        fs::write(base.join("basic/app.py.jinja"), "app").unwrap();
        fs::write(base.join("basic/pages/home.py.jinja"), "home").unwrap();
        fs::write(base.join("basic/.hidden"), "x").unwrap();
        root
    }

    #[test]
    fn lists_root_then_variant_entries() {
        let root = template_tree();
        let base = root.path();
        let variant = base.join("basic");
        let entries = TemplateWalker::new(base, &variant).entries().unwrap();

        let listed: Vec<(TemplateTier, String)> = entries
            .iter()
            .map(|e| (e.tier, e.template_name().unwrap()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (TemplateTier::Root, ".env.development.jinja".to_string()),
                (TemplateTier::Root, "README.md.jinja".to_string()),
                (TemplateTier::Variant, "app.py.jinja".to_string()),
                (TemplateTier::Variant, "pages/home.py.jinja".to_string()),
            ]
        );
    }

    #[test]
    fn root_entries_do_not_descend_into_variants() {
        let root = template_tree();
        let base = root.path();
        let other_variant = base.join("advanced");
        fs::create_dir_all(&other_variant).unwrap();
        let entries = TemplateWalker::new(base, &other_variant).entries().unwrap();
        assert!(entries.iter().all(|e| e.tier == TemplateTier::Root));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn targets_follow_tier() {
        let project = Path::new("/work/sales");
        let root_entry = TemplateEntry {
            source: PathBuf::from("/t/pyproject.toml.jinja"),
            relative: PathBuf::from("pyproject.toml.jinja"),
            tier: TemplateTier::Root,
        };
        assert_eq!(root_entry.target(project), project.join("pyproject.toml"));

        let nested = TemplateEntry {
            source: PathBuf::from("/t/basic/callbacks/__init__.py.jinja"),
            relative: PathBuf::from("callbacks/__init__.py.jinja"),
            tier: TemplateTier::Variant,
        };
        assert_eq!(
            nested.target(project),
            project.join("src").join("callbacks").join("__init__.py")
        );

        let top = TemplateEntry {
            source: PathBuf::from("/t/basic/app.py.jinja"),
            relative: PathBuf::from("app.py.jinja"),
            tier: TemplateTier::Variant,
        };
        assert_eq!(top.target(project), project.join("src").join("app.py"));
    }

    #[test]
    fn non_jinja_files_keep_their_name() {
        let entry = TemplateEntry {
            source: PathBuf::from("/t/basic/assets/logo.svg"),
            relative: PathBuf::from("assets/logo.svg"),
            tier: TemplateTier::Variant,
        };
        assert_eq!(entry.output_name(), OsString::from("logo.svg"));
        assert_eq!(
            entry.target(Path::new("p")),
            Path::new("p").join("src").join("assets").join("logo.svg")
        );
    }

    #[test]
    fn hidden_jinja_file_keeps_leading_dot() {
        let entry = TemplateEntry {
            source: PathBuf::from("/t/.env.development.jinja"),
            relative: PathBuf::from(".env.development.jinja"),
            tier: TemplateTier::Root,
        };
        assert_eq!(entry.output_name(), OsString::from(".env.development"));
    }
}

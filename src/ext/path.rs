use std::path::Path;

use crate::constants::TEMPLATE_EXTENSION;
use crate::error::{Error, Result};

/// Extension trait for Path with the conversions the template engine needs
pub trait PathExt {
    /// Converts a path to a string slice, returning an error if the path contains invalid Unicode characters.
    ///
    /// # Examples
    /// ```
    /// use create_dash_app::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("pages/home.py.jinja");
    /// assert_eq!(path.to_str_checked().unwrap(), "pages/home.py.jinja");
    /// ```
    fn to_str_checked(&self) -> Result<&str>;

    /// Converts a path into a template name: `/`-separated on every platform.
    fn to_template_name(&self) -> Result<String>;

    /// Whether the final component carries the `.jinja` extension.
    fn is_jinja_template(&self) -> bool;

    /// Whether the final component starts with a dot.
    fn is_hidden(&self) -> bool;
}

impl PathExt for Path {
    fn to_str_checked(&self) -> Result<&str> {
        self.to_str().ok_or_else(|| {
            Error::Other(anyhow::anyhow!(
                "Path '{}' contains invalid Unicode characters",
                self.display()
            ))
        })
    }

    fn to_template_name(&self) -> Result<String> {
        Ok(self.to_str_checked()?.replace('\\', "/"))
    }

    fn is_jinja_template(&self) -> bool {
        self.extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION)
    }

    fn is_hidden(&self) -> bool {
        self.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_to_str_checked_valid() {
        let path = Path::new("valid_path");
        assert_eq!(path.to_str_checked().unwrap(), "valid_path");
    }

    #[test]
    fn test_to_template_name_uses_forward_slashes() {
        let path = Path::new("callbacks").join("__init__.py.jinja");
        assert_eq!(path.to_template_name().unwrap(), "callbacks/__init__.py.jinja");
    }

    #[test]
    fn test_jinja_extension() {
        assert!(Path::new("app.py.jinja").is_jinja_template());
        assert!(Path::new(".env.development.jinja").is_jinja_template());
        assert!(!Path::new("logo.png").is_jinja_template());
        assert!(!Path::new("jinja").is_jinja_template());
    }

    #[test]
    fn test_hidden_files() {
        assert!(Path::new("templates/.gitignore").is_hidden());
        assert!(!Path::new("templates/README.md.jinja").is_hidden());
    }
}

use crate::error::Result;
use std::path::PathBuf;

/// Trait for loading templates from different sources.
pub trait TemplateLoader {
    /// Loads a template tree from the given source.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path to the root of the template tree
    fn load(&self) -> Result<PathBuf>;
}

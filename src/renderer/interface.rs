use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders an inline template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    /// * `template_name` - Optional name for the template (used in error messages)
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String>;

    /// Renders a template resolved by name through the renderer's search path.
    ///
    /// # Arguments
    /// * `name` - Template name, relative to one of the search directories
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render_named(&self, name: &str, context: &serde_json::Value) -> Result<String>;

    /// Whether a template with this name can be resolved.
    ///
    /// A missing template is `Ok(false)`; a template that exists but fails to
    /// load (for example a syntax error) is an error.
    fn has_template(&self, name: &str) -> Result<bool>;
}

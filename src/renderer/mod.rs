//! Jinja rendering of project templates
//!
//! - `interface`: the `TemplateRenderer` trait the processor renders through
//! - `minijinja`: the MiniJinja-backed implementation with a multi-directory loader
//! - `filters`: case conversion and regex filters available to templates

mod filters;
mod interface;
mod minijinja;

pub use filters::*;
pub use interface::TemplateRenderer;
pub use self::minijinja::MiniJinjaRenderer;

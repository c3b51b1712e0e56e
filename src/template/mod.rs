//! Template materialization engine
//!
//! This module contains the core template processing components:
//! - `walker`: enumerates shared root templates and variant templates
//! - `skip`: feature-flag rules that leave templates out of the project
//! - `processor`: turns a single template entry into an operation
//! - `operation`: the operations to be performed on the project tree

pub mod operation;
pub mod processor;
pub mod skip;
pub mod walker;

pub use operation::TemplateOperation;
pub use processor::TemplateProcessor;
pub use walker::{TemplateEntry, TemplateTier, TemplateWalker};

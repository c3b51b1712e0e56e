/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Project configuration collected from the user.
pub mod config;

/// Constants shared across modules.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Path helpers.
pub mod ext;

/// Lays out the project directory and renders templates into it.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// An abstraction that allows implementing a source for project templates.
pub mod loader;

/// Getting-started guide printed after generation.
pub mod next_steps;

/// Shell-outs to `uv` and `npm` after generation.
pub mod postprocess;

/// Working directory checks run before generation.
pub mod preflight;

/// User input and interaction handling.
pub mod prompt;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Template discovery and per-file processing.
pub mod template;

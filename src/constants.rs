//! Constants used throughout create-dash-app

/// Template file extension stripped from output names
pub const TEMPLATE_EXTENSION: &str = "jinja";

/// Template variant used when none is requested
pub const DEFAULT_VARIANT: &str = "basic";

/// Source directory of the generated project; variant templates land here
pub const SOURCE_DIR: &str = "src";

/// Subdirectory of `SOURCE_DIR` that is always created
pub const PAGES_DIR: &str = "pages";

/// Project name meaning "generate into the current directory"
pub const CURRENT_DIR: &str = ".";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Entries that suggest the working directory is already a project
pub const PROJECT_INDICATORS: &[&str] =
    &["pyproject.toml", "src", ".venv", "venv", "requirements.txt", "setup.py"];

/// Entries ignored when deciding whether the working directory is empty
pub const IGNORED_WHEN_EMPTY: &[&str] = &[".venv", ".git"];

/// Defaults offered by the interactive prompts
pub mod defaults {
    pub const PROJECT_NAME: &str = "my-dash-app";
    pub const DESCRIPTION: &str = "A Dash application";
    pub const PORT: u16 = 8000;
    pub const NONE_CHOICE: &str = "none";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

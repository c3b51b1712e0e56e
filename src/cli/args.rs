use crate::constants::{exit_codes, verbosity, CURRENT_DIR, DEFAULT_VARIANT};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Create a new Plotly Dash application with opinionated boilerplate code.
#[derive(Parser, Debug, Clone)]
#[command(name = "create-dash-app", author, version, about, long_about = None)]
pub struct Args {
    /// Parent directory the project is created in.
    #[arg(short, long, value_name = "DIR", default_value = CURRENT_DIR)]
    pub output_dir: PathBuf,

    /// Local template directory to use instead of the builtin templates.
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Template variant applied on top of the shared root templates.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_VARIANT)]
    pub variant: String,

    /// Predefined answers as JSON string or `-` to read from stdin.
    #[arg(short, long, value_name = "JSON|-", conflicts_with = "answers_file")]
    pub answers: Option<String>,

    /// Read predefined answers from a JSON file.
    #[arg(long = "answers-file", value_name = "PATH")]
    pub answers_file: Option<PathBuf>,

    /// Never prompt; missing answers take their defaults.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not run `uv` or `npm` after generation.
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
///
/// Without `-v` warnings still show, so failed shell-outs are never silent.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

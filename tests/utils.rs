#![allow(dead_code)]

use create_dash_app::cli::{run, Args};
use create_dash_app::error::Result;
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn relative_files(dir: &Path) -> HashSet<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.path().is_file())
        .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
        .collect()
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `actual` - The generated project.
/// * `expected` - The directory with the expected output.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let files1 = relative_files(actual);
    let files2 = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");
    println!();

    let only_in_actual: Vec<_> = files1.difference(&files2).collect();
    let only_in_expected: Vec<_> = files2.difference(&files1).collect();

    if !only_in_actual.is_empty() {
        println!("Files only in ACTUAL output:");
        for file in &only_in_actual {
            println!("  + {file:?}");
        }
        println!();
    }

    if !only_in_expected.is_empty() {
        println!("Files only in EXPECTED output:");
        for file in &only_in_expected {
            println!("  - {file:?}");
        }
        println!();
    }

    for file in files1.intersection(&files2) {
        let content1 = fs::read_to_string(actual.join(file)).unwrap_or_default();
        let content2 = fs::read_to_string(expected.join(file)).unwrap_or_default();
        if content1 != content2 {
            println!("\n  File: {file:?}");
            println!("  --- Actual content:\n{content1}");
            println!("  --- Expected content:\n{content2}");
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Arguments for a non-interactive run that never shells out.
pub fn test_args(templates: Option<&str>, output_dir: &Path, answers: &str) -> Args {
    Args {
        output_dir: output_dir.to_path_buf(),
        templates: templates.map(PathBuf::from),
        variant: "basic".to_string(),
        answers: Some(answers.to_string()),
        answers_file: None,
        non_interactive: true,
        dry_run: false,
        skip_install: true,
        verbose: 2,
    }
}

/// Runs the CLI against a template fixture and returns its result together
/// with the scratch directory the project was generated in.
pub fn generate(templates: Option<&str>, answers: &str) -> (Result<()>, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let result = run(test_args(templates, tmp_dir.path(), answers));
    (result, tmp_dir)
}

/// Runs the CLI with the given template and answers, compares the output to
/// the expected directory, prints any differences, and asserts that the
/// directories are identical.
///
/// # Arguments
/// * `templates` - Path to the template fixture.
/// * `expected_dir` - Path to the directory with expected output.
/// * `answers` - Answers for the non-interactive run.
pub fn run_and_assert(templates: &str, expected_dir: &str, answers: &str) {
    let (result, tmp_dir) = generate(Some(templates), answers);
    result.unwrap();

    match dir_diff::is_different(tmp_dir.path(), expected_dir) {
        Ok(true) => {
            print_dir_diff(tmp_dir.path(), expected_dir.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => debug!("Error comparing directories: {e:?}"),
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
}

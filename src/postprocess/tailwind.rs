use super::CommandRunner;
use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub const NPM: &str = "npm";

/// Entry stylesheet that pulls in Tailwind.
pub const ENTRY_CSS: &str = "@import \"tailwindcss\";\n";

pub const CONFIG_JS: &str = r#"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: [
    "./src/**/*.{py,html,js}",
    "./src/**/*.py",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

const BUILD_SCRIPT: &str =
    "tailwindcss -i ./src/assets/tailwind.css -o ./src/assets/tailwind-output.css --watch";
const BUILD_PROD_SCRIPT: &str =
    "tailwindcss -i ./src/assets/tailwind.css -o ./src/assets/tailwind-output.css --minify";

/// Adds the `build:css` and `build:css:prod` scripts to a parsed `package.json`.
///
/// Existing scripts are kept; the two CSS scripts are overwritten.
pub fn add_build_scripts(package_json: &mut Value) -> Result<()> {
    let root = package_json
        .as_object_mut()
        .ok_or_else(|| Error::ValidationError("package.json is not a JSON object".into()))?;
    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| Error::ValidationError("package.json `scripts` is not an object".into()))?;
    scripts.insert("build:css".into(), Value::String(BUILD_SCRIPT.into()));
    scripts.insert("build:css:prod".into(), Value::String(BUILD_PROD_SCRIPT.into()));
    Ok(())
}

/// Writes the Tailwind entry stylesheet and config into the project.
pub fn write_sources(project_root: &Path) -> Result<()> {
    let css = project_root.join("src").join("assets").join("tailwind.css");
    if let Some(parent) = css.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&css, ENTRY_CSS)?;
    log::info!("✅ Created tailwind.css entry file");

    fs::write(project_root.join("tailwind.config.js"), CONFIG_JS)?;
    log::info!("✅ Created tailwind.config.js");
    Ok(())
}

/// Rewrites `package.json` in place with the CSS build scripts.
pub fn update_package_json(project_root: &Path) -> Result<()> {
    let path = project_root.join("package.json");
    let mut package_json: Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
    add_build_scripts(&mut package_json)?;
    fs::write(&path, serde_json::to_string_pretty(&package_json)?)?;
    log::info!("✅ Updated package.json with build scripts");
    Ok(())
}

/// Installs Tailwind CSS through npm and runs a production build.
///
/// Does nothing unless `tailwind` is among the selected styling frameworks.
pub fn setup(project_root: &Path, config: &ProjectConfig) -> Result<()> {
    if !config.wants_tailwind() {
        return Ok(());
    }
    if !CommandRunner::is_available(NPM) {
        log::warn!(
            "⚠️  Warning: npm or node not found. Please install Node.js and npm, then run \
             'npm install' and 'npm run build:css:prod' manually."
        );
        return Ok(());
    }

    let runner = CommandRunner::new(project_root);
    if !project_root.join("package.json").exists() {
        log::info!("Initializing npm for Tailwind CSS setup ...");
        runner.run(NPM, &["init", "-y"])?;
    }

    log::info!("Installing Tailwind CSS and CLI as dev dependencies ...");
    runner.run(NPM, &["install", "-D", "tailwindcss", "@tailwindcss/cli"])?;

    write_sources(project_root)?;
    update_package_json(project_root)?;

    log::info!("Building Tailwind CSS (production build) ...");
    runner.run(NPM, &["run", "build:css:prod"])?;
    log::info!("✅ Successfully built Tailwind CSS output file");
    Ok(())
}

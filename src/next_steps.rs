use std::fmt::Write;

use crate::config::ProjectConfig;
use crate::generator::ProjectLayout;

/// Builds the numbered getting-started guide printed after generation.
///
/// The `cd` step is dropped when generating into the current directory and
/// the Tailwind step only appears when Tailwind was selected; later steps
/// are numbered accordingly.
pub fn render_next_steps(layout: &ProjectLayout, config: &ProjectConfig) -> String {
    let config = layout.effective_config(config);
    let slug = config.slug();
    let tailwind = config.wants_tailwind();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let mut line = |text: &str| {
        let _ = writeln!(out, "{text}");
    };

    line("");
    line("📋 Next Steps:");
    line("");

    if !layout.in_current_dir() {
        line("1. Navigate to your project:");
        line(&format!("   cd {}", layout.display_name()));
    }
    line("");

    line("2. Activate the virtual environment:");
    line("   # If using uv (recommended):");
    line("   uv venv");
    line("   source .venv/bin/activate  # On macOS/Linux");
    line("   .venv\\Scripts\\activate     # On Windows");
    line("");
    line("   # Or use uv run directly (no activation needed):");
    line("   uv run <command>");
    line("");

    line("3. Install dependencies (if not already done):");
    line("   uv sync");
    line("");

    if tailwind {
        line("4. Build Tailwind CSS:");
        line("   npm run build:css:prod");
        line("   # Or for watch mode during development:");
        line("   npm run build:css");
        line("");
    }

    let mut step = if tailwind { 5 } else { 4 };
    line(&format!("{step}. Run your Dash application:"));
    line("   # Option 1: Using the console script");
    line(&format!("   {slug}"));
    line("");
    line("   # Option 2: Using Python module");
    line("   python -m src.app");
    line("");
    line("   # Option 3: Using uv run");
    line(&format!("   uv run {slug}"));
    line("   # Or");
    line("   uv run python -m src.app");
    line("");

    step += 1;
    line(&format!("{step}. Development tips:"));
    line("   • The app will automatically open in your browser");
    line(&format!("   • Default URL: http://127.0.0.1:{}", config.port));
    line("   • Edit files in src/ to customize your app");
    if config.include_pages {
        line("   • Add new pages in src/pages/");
    }
    line("   • Add callbacks in src/callbacks/");
    line("   • Add components in src/components/");
    line("");

    step += 1;
    line(&format!("{step}. Additional resources:"));
    line("   • Dash documentation: https://dash.plotly.com/");
    if tailwind {
        line("   • Tailwind CSS docs: https://tailwindcss.com/docs");
    }
    line("   • Dash Bootstrap Components: https://dash-bootstrap-components.opensource.faculty.ai/");
    line("");
    line("🎉 Happy coding!");

    out
}

//! Command implementations

use anyhow::{Context, Result};
use dynawind::{generate_variables, semantic_color_references, ThemeFile};
use std::fs;
use std::path::Path;

/// Load a theme file with CLI-friendly error context
pub fn load_theme(path: &Path) -> Result<ThemeFile> {
    ThemeFile::load(path).with_context(|| format!("Failed to load {}", path.display()))
}

/// `:root` block for every section of a theme file
pub fn render_css(path: &Path) -> Result<String> {
    Ok(load_theme(path)?.to_root_block())
}

/// Declarations for one section (`None` = unscoped `vars`)
pub fn render_vars(path: &Path, scope: Option<&str>) -> Result<String> {
    let file = load_theme(path)?;
    let theme = file.section(scope).with_context(|| {
        let known: Vec<&str> = file.scopes.keys().map(String::as_str).collect();
        format!(
            "Scope '{}' not found in {} (available: {})",
            scope.unwrap_or_default(),
            path.display(),
            known.join(", ")
        )
    })?;
    Ok(generate_variables(scope, theme))
}

/// Semantic color catalog as pretty JSON
pub fn render_semantic() -> Result<String> {
    serde_json::to_string_pretty(&semantic_color_references())
        .context("Failed to serialize semantic color catalog")
}

/// Write output to a file, or stdout when no path is given
pub fn emit(output: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, format!("{output}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{output}"),
    }
    Ok(())
}

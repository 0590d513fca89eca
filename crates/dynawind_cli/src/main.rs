//! Dynawind CLI
//!
//! Renders theme files (TOML or JSON) into CSS custom property declarations
//! for static embedding:
//! - `dynawind css theme.toml` prints a `:root { ... }` block
//! - `dynawind vars theme.toml --scope color` prints one section's declarations
//! - `dynawind semantic` prints the semantic color `var()` catalog

mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Render theme files to CSS custom properties
#[derive(Parser, Debug)]
#[command(name = "dynawind")]
#[command(about = "Render theme files to CSS custom properties")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every section of a theme file as one :root block
    Css {
        /// Theme file (.toml or .json)
        file: PathBuf,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the declarations of a single section
    Vars {
        /// Theme file (.toml or .json)
        file: PathBuf,

        /// Scope to print (omit for the unscoped `vars` section)
        #[arg(short, long)]
        scope: Option<String>,
    },

    /// Print the semantic color catalog as JSON
    Semantic,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays pure CSS
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Css { file, out } => {
            tracing::debug!("Rendering :root block from {}", file.display());
            let css = render::render_css(&file)?;
            render::emit(&css, out.as_deref())
        }
        Command::Vars { file, scope } => {
            let vars = render::render_vars(&file, scope.as_deref())?;
            render::emit(&vars, None)
        }
        Command::Semantic => render::emit(&render::render_semantic()?, None),
    }
}

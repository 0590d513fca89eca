//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A theme consumer ran outside of any provider scope
    #[error("{consumer} must be used within a ThemeProvider")]
    MissingProvider {
        /// Name of the accessor that was called
        consumer: &'static str,
    },

    /// Failed to read a theme file
    #[error("Failed to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Theme file is not valid TOML (or holds non-string values)
    #[error("Invalid TOML theme: {0}")]
    Toml(#[from] toml::de::Error),

    /// Theme file is not valid JSON (or holds non-string values)
    #[error("Invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),

    /// No usable root style target in the host document
    #[error("Root style target unavailable: {0}")]
    RootUnavailable(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

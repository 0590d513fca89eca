//! Theme file handling
//!
//! A theme file holds an optional unscoped section and any number of scoped
//! sections, in TOML or JSON:
//!
//! ```toml
//! [vars]
//! radius = "0.5rem"
//!
//! [scopes.color]
//! primary = "#000"
//! secondary = "#fff"
//!
//! [scopes.typography]
//! fontFamily = "Inter, sans-serif"
//! ```
//!
//! Section and key order is kept exactly as written.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::css_vars::{generate_variables, wrap_in_root};
use crate::error::{Result, ThemeError};
use crate::root::{apply_to_root, StyleTarget};
use crate::theme::Theme;

/// Parsed theme file
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeFile {
    /// Unscoped variables (`--{key}`)
    #[serde(default, skip_serializing_if = "Theme::is_empty")]
    pub vars: Theme,
    /// Scoped variables (`--{scope}-{key}`), keyed by scope
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub scopes: IndexMap<String, Theme>,
}

impl ThemeFile {
    /// Parse a TOML theme
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Parse a JSON theme
    pub fn from_json_str(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    /// Load a theme file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        debug!(
            "Loaded theme {}: {} unscoped vars, {} scopes",
            path.display(),
            file.vars.len(),
            file.scopes.len()
        );
        Ok(file)
    }

    /// Look up a section; `None` selects the unscoped `vars` section
    pub fn section(&self, scope: Option<&str>) -> Option<&Theme> {
        match scope {
            None => Some(&self.vars),
            Some(scope) => self.scopes.get(scope),
        }
    }

    /// Iterate `(scope, theme)` sections, unscoped first, then in file order
    pub fn sections(&self) -> impl Iterator<Item = (Option<&str>, &Theme)> {
        std::iter::once((None, &self.vars)).chain(
            self.scopes
                .iter()
                .map(|(scope, theme)| (Some(scope.as_str()), theme)),
        )
    }

    /// One declaration fragment per non-empty section
    pub fn fragments(&self) -> Vec<String> {
        self.sections()
            .filter(|(_, theme)| !theme.is_empty())
            .map(|(scope, theme)| generate_variables(scope, theme))
            .collect()
    }

    /// All sections combined into a single `:root` block
    pub fn to_root_block(&self) -> String {
        wrap_in_root(self.fragments())
    }

    /// Apply every section to a live style target
    pub fn apply<T: StyleTarget + ?Sized>(&self, target: &mut T) {
        for (scope, theme) in self.sections() {
            apply_to_root(target, scope, theme);
        }
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

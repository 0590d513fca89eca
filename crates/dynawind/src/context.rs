//! Theme propagation to nested code
//!
//! A [`ThemeContext`] is passed explicitly down a call tree. Providers push a
//! theme for the duration of a closure; consumers read the innermost one with
//! [`ThemeContext::use_theme`], which fails immediately when no provider is
//! active.
//!
//! ```rust
//! use dynawind::{Theme, ThemeContext};
//!
//! let mut ctx = ThemeContext::new();
//! assert!(ctx.use_theme().is_err());
//!
//! let primary = ctx.provide(Theme::from([("primary", "#000")]), |ctx| {
//!     ctx.use_theme().map(|theme| theme.get("primary").map(str::to_owned))
//! });
//! assert_eq!(primary.unwrap().as_deref(), Some("#000"));
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::css_vars::{generate_variables, wrap_in_root};
use crate::error::{Result, ThemeError};
use crate::root::{apply_to_root, StyleTarget};
use crate::theme::Theme;

/// Stack of provided themes, innermost last
#[derive(Clone, Debug, Default)]
pub struct ThemeContext {
    stack: Vec<Arc<Theme>>,
}

impl ThemeContext {
    /// Create a context with no provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` with `theme` as the active theme.
    ///
    /// The theme is popped when `f` returns, so it is only visible inside the
    /// closure. Nested calls shadow outer themes.
    pub fn provide<R>(&mut self, theme: impl Into<Arc<Theme>>, f: impl FnOnce(&mut Self) -> R) -> R {
        self.stack.push(theme.into());
        debug!("ThemeContext::provide - depth {}", self.stack.len());

        let depth = self.stack.len();
        let result = f(self);

        self.stack.truncate(depth - 1);
        debug!("ThemeContext::provide - back to depth {}", self.stack.len());
        result
    }

    /// Get the active theme.
    ///
    /// Returns [`ThemeError::MissingProvider`] when called outside of every
    /// provider.
    pub fn use_theme(&self) -> Result<Arc<Theme>> {
        self.try_theme().ok_or(ThemeError::MissingProvider {
            consumer: "use_theme",
        })
    }

    /// Get the active theme, if any
    pub fn try_theme(&self) -> Option<Arc<Theme>> {
        self.stack.last().cloned()
    }

    /// Number of active providers
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// A theme plus the scope it is published under
///
/// Mirrors a UI provider component: holds the theme, provides it to nested
/// code, and renders the equivalent static CSS for server output.
#[derive(Clone, Debug)]
pub struct ThemeProvider {
    theme: Arc<Theme>,
    scope: Option<String>,
}

impl ThemeProvider {
    /// Provider for an unscoped theme
    pub fn new(theme: Theme) -> Self {
        Self {
            theme: Arc::new(theme),
            scope: None,
        }
    }

    /// Set the scope used for CSS output and root application
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Run `f` inside this provider
    pub fn provide<R>(&self, ctx: &mut ThemeContext, f: impl FnOnce(&mut ThemeContext) -> R) -> R {
        ctx.provide(Arc::clone(&self.theme), f)
    }

    /// Declarations for this provider's theme
    pub fn declarations(&self) -> String {
        generate_variables(self.scope(), &self.theme)
    }

    /// `:root` block for embedding in server-rendered output
    pub fn css(&self) -> String {
        wrap_in_root([self.declarations()])
    }

    /// Apply this provider's theme to a live style target
    pub fn apply<T: StyleTarget + ?Sized>(&self, target: &mut T) {
        apply_to_root(target, self.scope(), &self.theme);
    }
}

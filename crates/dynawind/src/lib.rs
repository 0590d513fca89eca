//! Dynawind
//!
//! Runtime theming through CSS custom properties.
//!
//! # Overview
//!
//! A [`Theme`] is an ordered map of variable keys to CSS values. From it the
//! crate derives:
//! - **Declarations**: `--color-primary: #000; --color-secondary: #fff;`
//! - **Root blocks**: `:root { ... }` for embedding in server-rendered pages
//! - **Live properties**: the same names written onto a [`StyleTarget`]
//!   (the document root in a browser) for runtime theme switching
//!
//! Static output and live application share one naming rule
//! ([`variable_name`]), so a stylesheet referencing `var(--color-primary)`
//! resolves identically either way.
//!
//! # Quick Start
//!
//! ```rust
//! use dynawind::{apply_semantic_color_theme_to_root, generate_variables, wrap_in_root, RootStyle, Theme};
//!
//! let colors = Theme::from([("primary", "#000"), ("secondary", "#fff")]);
//! let typography = Theme::from([("fontSize", "16px")]);
//!
//! // Static: one :root block with both scopes
//! let css = wrap_in_root([
//!     generate_variables(Some("color"), &colors),
//!     generate_variables(Some("typography"), &typography),
//! ]);
//! assert_eq!(
//!     css,
//!     ":root { --color-primary: #000; --color-secondary: #fff; --typography-fontSize: 16px; }"
//! );
//!
//! // Dynamic: write onto a style target
//! let mut root = RootStyle::new();
//! apply_semantic_color_theme_to_root(&mut root, &colors);
//! assert_eq!(root.get_property("--color-primary"), Some("#000"));
//! ```
//!
//! # Propagation
//!
//! [`ThemeContext`] carries the active theme to nested code and reports
//! [`ThemeError::MissingProvider`] when read outside a provider.

pub mod context;
pub mod css_vars;
pub mod error;
pub mod file;
pub mod root;
pub mod semantic_color;
pub mod theme;

// Re-export commonly used types
pub use context::{ThemeContext, ThemeProvider};
pub use css_vars::{
    generate_semantic_color_variables, generate_variables, variable_name, wrap_in_root,
    COLOR_SCOPE,
};
pub use error::{Result, ThemeError};
pub use file::ThemeFile;
pub use root::{apply_semantic_color_theme_to_root, apply_to_root, RootStyle, StyleTarget};
pub use semantic_color::{semantic_color_references, SemanticColor};
pub use theme::Theme;

#[cfg(feature = "web")]
pub use root::web::document_root_style;

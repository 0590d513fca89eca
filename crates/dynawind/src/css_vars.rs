//! CSS custom property generation
//!
//! Pure functions turning a [`Theme`] into declaration text:
//!
//! ```rust
//! use dynawind::{generate_variables, wrap_in_root, Theme};
//!
//! let theme = Theme::from([("primary", "#000"), ("secondary", "#fff")]);
//! let colors = generate_variables(Some("color"), &theme);
//! assert_eq!(colors, "--color-primary: #000; --color-secondary: #fff;");
//!
//! let css = wrap_in_root([colors]);
//! assert_eq!(css, ":root { --color-primary: #000; --color-secondary: #fff; }");
//! ```

use crate::theme::Theme;

/// Scope used by the semantic color helpers
pub const COLOR_SCOPE: &str = "color";

/// Build the custom property name for a theme key.
///
/// `--{scope}-{key}` when a scope is given, `--{key}` otherwise. An empty
/// scope counts as no scope.
///
/// This is the only place property names are formed; both declaration
/// generation and root application go through it.
pub fn variable_name(scope: Option<&str>, key: &str) -> String {
    match scope {
        Some(scope) if !scope.is_empty() => format!("--{scope}-{key}"),
        _ => format!("--{key}"),
    }
}

/// Generate `--name: value;` declarations for every entry, space-joined.
///
/// Entries keep the theme's insertion order. An empty theme yields an empty
/// string. Keys and values are emitted verbatim.
pub fn generate_variables(scope: Option<&str>, theme: &Theme) -> String {
    theme
        .iter()
        .map(|(key, value)| format!("{}: {};", variable_name(scope, key), value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`generate_variables`] under the `color` scope.
pub fn generate_semantic_color_variables(theme: &Theme) -> String {
    generate_variables(Some(COLOR_SCOPE), theme)
}

/// Wrap pre-built declaration fragments in a `:root` block.
///
/// Fragments are joined with a single space and placed between `:root { `
/// and ` }`. With no fragments the result is `":root {  }"`.
pub fn wrap_in_root<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = fragments
        .into_iter()
        .map(|fragment| fragment.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(" ");
    format!(":root {{ {joined} }}")
}

//! Live application of themes to a root style target
//!
//! The browser's `document.documentElement.style` is the usual target (see the
//! `web` feature), but anything that stores named properties can implement
//! [`StyleTarget`]. [`RootStyle`] is an in-memory target for headless use.

use indexmap::IndexMap;
use tracing::trace;

use crate::css_vars::{variable_name, wrap_in_root, COLOR_SCOPE};
use crate::theme::Theme;

/// A style scope custom properties can be written to
pub trait StyleTarget {
    /// Set (or overwrite) a single property
    fn set_property(&mut self, name: &str, value: &str);
}

impl<T: StyleTarget + ?Sized> StyleTarget for &mut T {
    fn set_property(&mut self, name: &str, value: &str) {
        (**self).set_property(name, value);
    }
}

impl StyleTarget for IndexMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }
}

/// Write every theme entry onto `target` as a custom property.
///
/// Property names match [`generate_variables`](crate::generate_variables) for
/// the same scope. Properties already on the target that are absent from
/// `theme` are left untouched.
pub fn apply_to_root<T: StyleTarget + ?Sized>(target: &mut T, scope: Option<&str>, theme: &Theme) {
    trace!("apply_to_root: scope={:?}, {} properties", scope, theme.len());
    for (key, value) in theme {
        target.set_property(&variable_name(scope, key), value);
    }
}

/// [`apply_to_root`] under the `color` scope.
pub fn apply_semantic_color_theme_to_root<T: StyleTarget + ?Sized>(target: &mut T, theme: &Theme) {
    apply_to_root(target, Some(COLOR_SCOPE), theme);
}

/// In-memory root style scope
///
/// Keeps properties in first-write order. Useful for server rendering and for
/// snapshotting what a live document would hold.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RootStyle {
    properties: IndexMap<String, String>,
}

impl RootStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a property value by full name (including `--`)
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Remove a property, returning its value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.shift_remove(name)
    }

    /// Remove every property
    pub fn clear(&mut self) {
        self.properties.clear();
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in first-write order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Render the current properties as a `:root` block
    pub fn to_css(&self) -> String {
        wrap_in_root(
            self.iter()
                .map(|(name, value)| format!("{name}: {value};")),
        )
    }
}

impl StyleTarget for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_owned(), value.to_owned());
    }
}

#[cfg(feature = "web")]
pub mod web {
    //! Browser root style target

    use super::StyleTarget;
    use crate::error::{Result, ThemeError};
    use wasm_bindgen::JsCast;
    use web_sys::{CssStyleDeclaration, HtmlElement};

    impl StyleTarget for CssStyleDeclaration {
        fn set_property(&mut self, name: &str, value: &str) {
            if let Err(err) = CssStyleDeclaration::set_property(self, name, value) {
                tracing::warn!("setProperty({}) rejected: {:?}", name, err);
            }
        }
    }

    /// Style declaration of `document.documentElement`
    pub fn document_root_style() -> Result<CssStyleDeclaration> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::RootUnavailable("no window".into()))?;
        let document = window
            .document()
            .ok_or_else(|| ThemeError::RootUnavailable("no document".into()))?;
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::RootUnavailable("no document element".into()))?;
        let root: HtmlElement = root
            .dyn_into()
            .map_err(|_| ThemeError::RootUnavailable("document element is not HTML".into()))?;
        Ok(root.style())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: Vec<(String, String)>,
    }

    impl StyleTarget for Recorder {
        fn set_property(&mut self, name: &str, value: &str) {
            self.writes.push((name.to_owned(), value.to_owned()));
        }
    }

    #[test]
    fn writes_each_entry_in_order() {
        let mut recorder = Recorder::default();
        let theme = Theme::from([("primary", "#000"), ("secondary", "#fff")]);

        apply_to_root(&mut recorder, Some("color"), &theme);

        assert_eq!(
            recorder.writes,
            vec![
                ("--color-primary".to_string(), "#000".to_string()),
                ("--color-secondary".to_string(), "#fff".to_string()),
            ]
        );
    }

    #[test]
    fn empty_theme_writes_nothing() {
        let mut recorder = Recorder::default();
        apply_to_root(&mut recorder, Some("color"), &Theme::new());
        apply_semantic_color_theme_to_root(&mut recorder, &Theme::new());
        assert!(recorder.writes.is_empty());
    }

    #[test]
    fn partial_update_keeps_stale_keys() {
        let mut root = RootStyle::new();
        apply_semantic_color_theme_to_root(
            &mut root,
            &Theme::from([("primary", "#000"), ("secondary", "#fff")]),
        );
        apply_semantic_color_theme_to_root(&mut root, &Theme::from([("primary", "#111")]));

        assert_eq!(root.len(), 2);
        assert_eq!(root.get_property("--color-primary"), Some("#111"));
        assert_eq!(root.get_property("--color-secondary"), Some("#fff"));
    }

    #[test]
    fn caller_clears_stale_keys() {
        let mut root = RootStyle::new();
        apply_semantic_color_theme_to_root(
            &mut root,
            &Theme::from([("primary", "#000"), ("secondary", "#fff")]),
        );

        assert_eq!(root.remove_property("--color-secondary").as_deref(), Some("#fff"));
        assert_eq!(root.remove_property("--color-secondary"), None);
        apply_semantic_color_theme_to_root(&mut root, &Theme::from([("primary", "#111")]));
        assert_eq!(root.to_css(), ":root { --color-primary: #111; }");

        root.clear();
        assert!(root.is_empty());
        assert_eq!(root.to_css(), ":root {  }");
    }

    #[test]
    fn unscoped_application() {
        let mut root = RootStyle::new();
        apply_to_root(&mut root, None, &Theme::from([("gap", "4px")]));
        assert_eq!(root.get_property("--gap"), Some("4px"));
        assert_eq!(root.to_css(), ":root { --gap: 4px; }");
    }

    #[test]
    fn index_map_target() {
        let mut map: IndexMap<String, String> = IndexMap::new();
        apply_to_root(&mut map, Some("space"), &Theme::from([("sm", "2px")]));
        assert_eq!(map.get("--space-sm").map(String::as_str), Some("2px"));
    }
}

//! Semantic color catalog
//!
//! Names of the color tokens a typical design system exposes, and their
//! `var(--color-*)` references. Utility-CSS configs map color names to these
//! references so that switching the applied theme recolors everything.

use indexmap::IndexMap;
use std::fmt::{Display, Formatter};

use crate::css_vars::{variable_name, COLOR_SCOPE};

/// Semantic color token keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticColor {
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Background,
    Foreground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl SemanticColor {
    /// Theme key for this color (without scope or `--`)
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Ring => "ring",
        }
    }

    /// All semantic colors, in catalog order.
    pub fn all() -> &'static [SemanticColor] {
        const COLORS: [SemanticColor; 15] = [
            SemanticColor::Primary,
            SemanticColor::PrimaryForeground,
            SemanticColor::Secondary,
            SemanticColor::SecondaryForeground,
            SemanticColor::Background,
            SemanticColor::Foreground,
            SemanticColor::Muted,
            SemanticColor::MutedForeground,
            SemanticColor::Accent,
            SemanticColor::AccentForeground,
            SemanticColor::Destructive,
            SemanticColor::DestructiveForeground,
            SemanticColor::Border,
            SemanticColor::Input,
            SemanticColor::Ring,
        ];
        &COLORS
    }

    /// Parse a theme key back into a semantic color
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|color| color.key() == key)
    }

    /// Custom property name, e.g. `--color-primary`
    pub fn variable_name(self) -> String {
        variable_name(Some(COLOR_SCOPE), self.key())
    }

    /// CSS reference to the applied value, e.g. `var(--color-primary)`
    pub fn var_reference(self) -> String {
        format!("var({})", self.variable_name())
    }
}

impl Display for SemanticColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Map of every semantic color key to its `var(--color-*)` reference.
pub fn semantic_color_references() -> IndexMap<&'static str, String> {
    SemanticColor::all()
        .iter()
        .map(|color| (color.key(), color.var_reference()))
        .collect()
}

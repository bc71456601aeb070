//! Semantic palette roles and their mapping to palette keys.
//!
//! A [`Role`] is a design slot ("Text", "Red", "Base") that is independent of
//! how a particular palette names its colors. Every role maps to exactly one
//! palette key, and roles are always presented in the order of [`Role::ALL`]:
//! accents first, then the foreground stack, then the base stack.

use std::fmt;
use std::str::FromStr;

/// A semantic color role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    // ── Accents ───────────────────────────────────────────────
    /// Red accent (`red`).
    Red,
    /// Orange accent (`orange`).
    Orange,
    /// Yellow accent (`yellow`).
    Yellow,
    /// Green accent (`green`).
    Green,
    /// Cyan accent (`cyan`).
    Cyan,
    /// Blue accent (`blue`).
    Blue,
    /// Purple accent (`purple`).
    Purple,
    /// Muted red (`dark_red`).
    DarkRed,
    /// Muted yellow (`dark_yellow`).
    DarkYellow,
    /// Muted purple (`dark_purple`).
    DarkPurple,

    // ── Foreground stack ──────────────────────────────────────
    /// Main foreground (`fg`).
    Text,
    /// Secondary text (`light_grey`).
    Subtext1,
    /// Dimmed text (`grey`).
    Subtext0,
    /// Overlay (`bg2`).
    Overlay2,
    /// Overlay (`bg3`).
    Overlay1,
    /// Selection overlay (`bg_blue`).
    Overlay0,
    /// Surface (`diff_text`).
    Surface2,
    /// Surface (`diff_change`).
    Surface1,
    /// Surface (`diff_add`).
    Surface0,

    // ── Base stack ────────────────────────────────────────────
    /// Editor background (`bg0`).
    Base,
    /// Panel background (`bg1`).
    Mantle,
    /// Darkest background (`bg_d`).
    Crust,
}

impl Role {
    /// All roles in display order.
    pub const ALL: [Self; 22] = [
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Cyan,
        Self::Blue,
        Self::Purple,
        Self::DarkRed,
        Self::DarkYellow,
        Self::DarkPurple,
        Self::Text,
        Self::Subtext1,
        Self::Subtext0,
        Self::Overlay2,
        Self::Overlay1,
        Self::Overlay0,
        Self::Surface2,
        Self::Surface1,
        Self::Surface0,
        Self::Base,
        Self::Mantle,
        Self::Crust,
    ];

    /// Returns every role in display order.
    #[must_use]
    pub const fn ordered() -> &'static [Self] {
        &Self::ALL
    }

    /// Human-facing role name, e.g. "Dark Red".
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Orange => "Orange",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::DarkRed => "Dark Red",
            Self::DarkYellow => "Dark Yellow",
            Self::DarkPurple => "Dark Purple",
            Self::Text => "Text",
            Self::Subtext1 => "Subtext1",
            Self::Subtext0 => "Subtext0",
            Self::Overlay2 => "Overlay2",
            Self::Overlay1 => "Overlay1",
            Self::Overlay0 => "Overlay0",
            Self::Surface2 => "Surface2",
            Self::Surface1 => "Surface1",
            Self::Surface0 => "Surface0",
            Self::Base => "Base",
            Self::Mantle => "Mantle",
            Self::Crust => "Crust",
        }
    }

    /// Key under which this role's color is stored in a palette.
    #[must_use]
    pub const fn palette_key(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::DarkRed => "dark_red",
            Self::DarkYellow => "dark_yellow",
            Self::DarkPurple => "dark_purple",
            Self::Text => "fg",
            Self::Subtext1 => "light_grey",
            Self::Subtext0 => "grey",
            Self::Overlay2 => "bg2",
            Self::Overlay1 => "bg3",
            Self::Overlay0 => "bg_blue",
            Self::Surface2 => "diff_text",
            Self::Surface1 => "diff_change",
            Self::Surface0 => "diff_add",
            Self::Base => "bg0",
            Self::Mantle => "bg1",
            Self::Crust => "bg_d",
        }
    }

    /// File-name form of the label: lowercase, spaces and underscores as hyphens.
    ///
    /// # Examples
    ///
    /// ```
    /// use onedark_palette::models::Role;
    ///
    /// assert_eq!(Role::DarkRed.slug(), "dark-red");
    /// assert_eq!(Role::Subtext1.slug(), "subtext1");
    /// ```
    #[must_use]
    pub fn slug(self) -> String {
        self.label().replace([' ', '_'], "-").to_lowercase()
    }

    /// Looks up a role by its label. Unknown names yield `None`.
    #[must_use]
    pub fn resolve(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.label() == label)
    }

    /// Maps a role label straight to its palette key.
    #[must_use]
    pub fn resolve_key(label: &str) -> Option<&'static str> {
        Self::resolve(label).map(Self::palette_key)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| anyhow::anyhow!("Unknown palette role '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_role_count() {
        assert_eq!(Role::ALL.len(), 22);
        assert_eq!(Role::ordered().len(), 22);
    }

    #[test]
    fn test_display_order() {
        let labels: Vec<&str> = Role::ordered().iter().map(|r| r.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Red",
                "Orange",
                "Yellow",
                "Green",
                "Cyan",
                "Blue",
                "Purple",
                "Dark Red",
                "Dark Yellow",
                "Dark Purple",
                "Text",
                "Subtext1",
                "Subtext0",
                "Overlay2",
                "Overlay1",
                "Overlay0",
                "Surface2",
                "Surface1",
                "Surface0",
                "Base",
                "Mantle",
                "Crust",
            ]
        );
    }

    #[test]
    fn test_mapping_is_injective() {
        let keys: HashSet<&str> = Role::ALL.iter().map(|r| r.palette_key()).collect();
        assert_eq!(keys.len(), Role::ALL.len());
    }

    #[test]
    fn test_labels_are_unique_and_resolve() {
        for role in Role::ALL {
            assert_eq!(Role::resolve(role.label()), Some(role));
        }
    }

    #[test]
    fn test_resolve_key() {
        assert_eq!(Role::resolve_key("Dark Red"), Some("dark_red"));
        assert_eq!(Role::resolve_key("Text"), Some("fg"));
        assert_eq!(Role::resolve_key("Crust"), Some("bg_d"));
        assert_eq!(Role::resolve_key("Magenta"), None);
        assert_eq!(Role::resolve_key("dark red"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Overlay0".parse::<Role>().unwrap(), Role::Overlay0);
        assert!("Rosewater".parse::<Role>().is_err());
    }

    #[test]
    fn test_slugs() {
        assert_eq!(Role::Red.slug(), "red");
        assert_eq!(Role::DarkPurple.slug(), "dark-purple");
        assert_eq!(Role::Surface0.slug(), "surface0");

        for role in Role::ALL {
            let slug = role.slug();
            assert!(!slug.contains(' ') && !slug.contains('_'), "{slug}");
            assert_eq!(slug, slug.to_lowercase());
        }
    }
}

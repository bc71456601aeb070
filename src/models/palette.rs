//! Palette data structures decoded from palette JSON.
//!
//! The input is a JSON object mapping palette names to palettes, where each
//! palette maps palette keys (e.g. "bg0", "red") to hex color strings:
//!
//! ```json
//! { "dark": { "red": "#E06C75", "bg0": "#282C34" } }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Role;

/// A single palette: palette key to hex color string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Palette {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a color, builder style.
    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, hex: impl Into<String>) -> Self {
        self.colors.insert(key.into(), hex.into());
        self
    }

    /// Raw hex string stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// Hex string for `role`, if the palette defines its key.
    #[must_use]
    pub fn color_for(&self, role: Role) -> Option<&str> {
        self.get(role.palette_key())
    }

    /// Roles this palette defines, in display order, with their raw hex strings.
    ///
    /// Roles whose key is missing from the palette are skipped. Keys that no
    /// role maps to are ignored.
    pub fn role_colors(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ordered()
            .iter()
            .filter_map(move |&role| self.color_for(role).map(|hex| (role, hex)))
    }

    /// Number of keys in the palette, mapped or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Palette {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// A collection of named palettes, iterated in palette-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteSet {
    palettes: BTreeMap<String, Palette>,
}

impl PaletteSet {
    /// Decodes a palette collection from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object of objects of strings.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse palette JSON")
    }

    /// Decodes a palette collection from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not valid palette JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("Failed to parse palette JSON")
    }

    /// Adds or replaces a named palette, builder style.
    #[must_use]
    pub fn with_palette(mut self, name: impl Into<String>, palette: Palette) -> Self {
        self.palettes.insert(name.into(), palette);
        self
    }

    /// Looks up a palette by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Palette> {
        self.palettes.get(name)
    }

    /// Iterates `(name, palette)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Palette)> {
        self.palettes.iter().map(|(name, palette)| (name.as_str(), palette))
    }

    /// Number of palettes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    /// Returns true if there are no palettes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

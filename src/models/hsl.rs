//! Integer HSL color representation used in palette tables.

use std::fmt;

/// HSL color with whole-number components.
///
/// Produced by [`RgbColor::to_hsl`](super::RgbColor::to_hsl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HslColor {
    /// Hue in degrees (0-359)
    pub h: u16,
    /// Saturation percent (0-100)
    pub s: u8,
    /// Lightness percent (0-100)
    pub l: u8,
}

impl HslColor {
    /// Creates a new `HslColor` from its components.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

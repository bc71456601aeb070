//! RGB color handling with hex parsing and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithm)
#![allow(clippy::float_cmp)]

use std::fmt;
use thiserror::Error;

use super::HslColor;

/// Errors produced while parsing a color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// The string is not exactly six hex digits after an optional `#`.
    #[error("invalid hex color: {input}")]
    InvalidFormat {
        /// The offending input, with any leading `#` removed.
        input: String,
    },
}

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use onedark_palette::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#E06C75").unwrap();
    /// assert_eq!(color, RgbColor::new(224, 108, 117));
    ///
    /// let color = RgbColor::from_hex("282c34").unwrap();
    /// assert_eq!(color, RgbColor::new(40, 44, 52));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] unless the string, minus one
    /// optional leading `#`, is exactly 6 hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        // from_str_radix tolerates a leading '+', so check the digits up front.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat {
                input: digits.to_string(),
            });
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidFormat {
                input: digits.to_string(),
            })
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use onedark_palette::models::RgbColor;
    ///
    /// let color = RgbColor::new(224, 108, 117);
    /// assert_eq!(color.to_hex(), "#E06C75");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// Hue is in whole degrees (0-359), saturation and lightness in whole
    /// percent (0-100). Each component is rounded half away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use onedark_palette::models::{HslColor, RgbColor};
    ///
    /// let red = RgbColor::new(255, 0, 0);
    /// assert_eq!(red.to_hsl(), HslColor::new(0, 100, 50));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let lightness = (max + min) / 2.0;

        let (hue, saturation) = if max == min {
            // Achromatic
            (0.0, 0.0)
        } else {
            let delta = max - min;
            let saturation = if lightness > 0.5 {
                delta / (2.0 - max - min)
            } else {
                delta / (max + min)
            };

            let hue = if max == r {
                let h = (g - b) / delta;
                if g < b {
                    h + 6.0
                } else {
                    h
                }
            } else if max == g {
                (b - r) / delta + 2.0
            } else {
                (r - g) / delta + 4.0
            };

            (hue / 6.0, saturation)
        };

        // A hue just below a full turn rounds up to 360, which is 0 again.
        let h = (hue * 360.0).round() as u16 % 360;
        let s = (saturation * 100.0).round() as u8;
        let l = (lightness * 100.0).round() as u8;

        HslColor::new(h, s, l)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

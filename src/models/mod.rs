//! Data models for palettes, roles, and colors.
//!
//! This module contains the core data structures shared by the swatch and
//! table exporters. Models are independent of file output and the CLI.

pub mod hsl;
pub mod palette;
pub mod rgb;
pub mod role;

// Re-export all model types
pub use hsl::HslColor;
pub use palette::{Palette, PaletteSet};
pub use rgb::{ColorError, RgbColor};
pub use role::Role;

//! Application-wide constants.
//!
//! This module defines the binary names, output locations, and the fixed
//! swatch geometry shared by both palette tools.

/// Binary name of the swatch generator (used in help text).
pub const SWATCHES_BINARY_NAME: &str = "palette-to-color-swatches";

/// Binary name of the HTML table generator (used in help text).
pub const TABLE_BINARY_NAME: &str = "palette-to-html-table";

/// Directory, relative to the working directory, that receives swatch PNGs.
pub const SWATCH_OUTPUT_DIR: &str = "assets/palette/circles";

/// Published location of the swatch PNGs referenced from the HTML table.
pub const SWATCH_URL_BASE: &str =
    "https://github.com/onedarktheme/onedark/blob/master/assets/palette/circles";

/// Width and height of a swatch image in pixels.
pub const SWATCH_SIZE: u32 = 23;

/// Radius of the swatch circle in pixels.
pub const SWATCH_RADIUS: i32 = 11;

//! Export functionality for palettes.
//!
//! This module turns a decoded [`Palette`](crate::models::Palette) into its two
//! published artifacts: PNG circle swatches and an HTML table documenting
//! every role's hex, RGB, and HSL values.

pub mod html_table;
pub mod swatch;

pub use html_table::render_table;
pub use swatch::{render_swatch, ExportError, SwatchReport, SwatchWriter};

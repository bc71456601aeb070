//! OneDark palette tooling library.
//!
//! This library decodes named color palettes, maps their keys onto a fixed
//! set of semantic roles, and exports them as PNG circle swatches and HTML
//! tables with hex, RGB, and HSL values.

// Module declarations
pub mod cli;
pub mod constants;
pub mod export;
pub mod models;

//! Command-line front ends for the palette tools.
//!
//! Each binary is a thin wrapper around one of the command structs here:
//! [`SwatchesArgs`] for `palette-to-color-swatches` and [`TableArgs`] for
//! `palette-to-html-table`.

pub mod common;
pub mod input;
pub mod logging;
pub mod swatches;
pub mod table;

// Re-export types used by the binaries and tests
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use input::{parse_args, InputArgs};
pub use logging::init_logging;
pub use swatches::SwatchesArgs;
pub use table::TableArgs;

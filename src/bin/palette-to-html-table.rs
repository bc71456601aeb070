//! Palette HTML table generator.
//!
//! Reads palette JSON from a file or stdin and prints a collapsible HTML
//! table per palette listing each role's hex, RGB, and HSL values.
//!
//! # Usage
//!
//! ```bash
//! cat palettes.json | palette-to-html-table
//! palette-to-html-table -file palettes.json
//! ```

use onedark_palette::cli::{self, TableArgs};
use tracing::error;

fn main() {
    cli::init_logging();

    let result =
        cli::parse_args::<TableArgs, _, _>(std::env::args_os()).and_then(|args| args.execute());

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(e.exit_code().into());
    }
}

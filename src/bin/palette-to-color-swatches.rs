//! Palette swatch generator.
//!
//! Reads palette JSON from a file or stdin and writes a 23x23 PNG circle for
//! every recognized role into `./assets/palette/circles/`.
//!
//! # Usage
//!
//! ```bash
//! cat palettes.json | palette-to-color-swatches
//! palette-to-color-swatches -file palettes.json
//! ```

use onedark_palette::cli::{self, SwatchesArgs};
use tracing::error;

fn main() {
    cli::init_logging();

    let result = cli::parse_args::<SwatchesArgs, _, _>(std::env::args_os())
        .and_then(|args| args.execute());

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(e.exit_code().into());
    }
}

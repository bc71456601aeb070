//! Swatch command: writes a PNG circle for every palette role.

use crate::cli::common::{CliError, CliResult};
use crate::cli::input::{self, Input, InputArgs};
use crate::constants::{SWATCHES_BINARY_NAME, SWATCH_OUTPUT_DIR};
use crate::export::SwatchWriter;
use crate::models::PaletteSet;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Reads a JSON palette definition and writes 23x23 circle color swatches
#[derive(Debug, Clone, Parser)]
#[command(name = SWATCHES_BINARY_NAME, disable_help_flag = true)]
pub struct SwatchesArgs {
    /// Input flags shared with the table tool
    #[command(flatten)]
    pub input: InputArgs,
}

impl SwatchesArgs {
    /// Execute the swatch command, writing into `assets/palette/circles`.
    pub fn execute(&self) -> CliResult<()> {
        match self.input.load()? {
            Input::Help => {
                print_help();
                Ok(())
            }
            Input::Palettes(palettes) => {
                write_swatches(&palettes, Path::new(SWATCH_OUTPUT_DIR))?;
                Ok(())
            }
        }
    }
}

/// Writes the swatches of every palette into `output_dir`.
///
/// Per-role failures are logged and skipped. Returns every file written.
///
/// # Errors
///
/// Returns a directory error if `output_dir` cannot be created.
pub fn write_swatches(palettes: &PaletteSet, output_dir: &Path) -> CliResult<Vec<PathBuf>> {
    let writer = SwatchWriter::new(output_dir);
    let mut written = Vec::new();

    for (name, palette) in palettes.iter() {
        let report = writer
            .write_palette(name, palette)
            .map_err(|e| CliError::directory(e.to_string()))?;
        written.extend(report.written);
    }

    Ok(written)
}

/// Usage text printed to stderr for `-h`, `--help`, and empty input.
#[must_use]
pub fn help_text() -> String {
    let description = format!(
        "Reads a JSON palette definition and outputs 23x23 circle color swatches
  for each color in the palettes and saves them as PNGs in ./{SWATCH_OUTPUT_DIR}/"
    );
    input::help_text(SWATCHES_BINARY_NAME, &description)
}

fn print_help() {
    eprint!("{}", help_text());
}

//! Table command: prints an HTML palette table for every palette.

use crate::cli::common::{CliError, CliResult};
use crate::cli::input::{self, Input, InputArgs};
use crate::constants::TABLE_BINARY_NAME;
use crate::export::render_table;
use crate::models::PaletteSet;
use clap::Parser;
use std::io::{self, Write};

/// Reads a JSON palette definition and outputs an HTML table of its colors
#[derive(Debug, Clone, Parser)]
#[command(name = TABLE_BINARY_NAME, disable_help_flag = true)]
pub struct TableArgs {
    /// Input flags shared with the swatch tool
    #[command(flatten)]
    pub input: InputArgs,
}

impl TableArgs {
    /// Execute the table command, printing to stdout.
    pub fn execute(&self) -> CliResult<()> {
        match self.input.load()? {
            Input::Help => {
                print_help();
                Ok(())
            }
            Input::Palettes(palettes) => {
                let stdout = io::stdout();
                write_tables(&palettes, &mut stdout.lock())
            }
        }
    }
}

/// Writes one table block per palette, each followed by a blank line.
///
/// Stops at the first palette with an invalid color; blocks already written
/// stay written.
///
/// # Errors
///
/// Returns a color-format error for an invalid hex color, or an input error
/// if the output cannot be written.
pub fn write_tables<W: Write>(palettes: &PaletteSet, out: &mut W) -> CliResult<()> {
    for (name, palette) in palettes.iter() {
        let html = render_table(name, palette)?;
        writeln!(out, "{html}")
            .map_err(|e| CliError::input(format!("Failed to write output: {e}")))?;
    }
    Ok(())
}

/// Usage text printed to stderr for `-h`, `--help`, and empty input.
#[must_use]
pub fn help_text() -> String {
    input::help_text(
        TABLE_BINARY_NAME,
        "Reads a JSON palette definition and outputs an HTML table showing
  the colors with their hex, RGB, and HSL values.",
    )
}

fn print_help() {
    eprint!("{}", help_text());
}

//! Input handling shared by both palette tools.
//!
//! Both tools accept the same flags, `-h`/`--help` and `-file <path>`, and
//! read palette JSON from the named file or from standard input.

use crate::cli::common::{CliError, CliResult};
use crate::models::PaletteSet;
use clap::{Args, Parser};
use std::ffi::OsString;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::debug;

/// Flags common to the palette tools.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Show this help message and exit
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// JSON file containing palettes (reads stdin when omitted)
    #[arg(long = "file", value_name = "FILENAME")]
    pub file: Option<PathBuf>,
}

/// What a tool should do after reading its input.
#[derive(Debug)]
pub enum Input {
    /// Nothing to process; print usage instead.
    Help,
    /// Decoded palettes ready for export.
    Palettes(PaletteSet),
}

impl InputArgs {
    /// Reads raw input bytes from the `-file` path or from standard input.
    ///
    /// # Errors
    ///
    /// Returns an input error if the file cannot be read or stdin fails.
    pub fn read_bytes(&self) -> CliResult<Vec<u8>> {
        if let Some(path) = &self.file {
            debug!("Reading palettes from {}", path.display());
            fs::read(path).map_err(|e| {
                CliError::input(format!("Failed to open file {}: {e}", path.display()))
            })
        } else {
            debug!("Reading palettes from stdin");
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .map_err(|e| CliError::input(format!("Failed to read input: {e}")))?;
            Ok(data)
        }
    }

    /// Resolves the flags into the work to do: help, or decoded palettes.
    ///
    /// `--help` and empty input both resolve to [`Input::Help`].
    ///
    /// # Errors
    ///
    /// Returns an input error for unreadable input and a decode error for
    /// input that is not a JSON object of palettes.
    pub fn load(&self) -> CliResult<Input> {
        if self.help {
            return Ok(Input::Help);
        }

        let data = self.read_bytes()?;
        decode_input(&data)
    }
}

/// Decodes raw input bytes. Empty input means "show help".
///
/// # Errors
///
/// Returns a decode error if the bytes are not palette JSON.
pub fn decode_input(data: &[u8]) -> CliResult<Input> {
    if data.is_empty() {
        return Ok(Input::Help);
    }

    PaletteSet::from_slice(data)
        .map(Input::Palettes)
        .map_err(|e| CliError::decode(format!("{e:#}")))
}

/// Rewrites Go-style single-dash long flags (`-file`, `-help`) into the
/// double-dash form clap understands. Everything else passes through.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let rewritten = arg
                .to_str()
                .filter(|s| *s == "-file" || s.starts_with("-file=") || *s == "-help")
                .map(|s| OsString::from(format!("-{s}")));
            rewritten.unwrap_or(arg)
        })
        .collect()
}

/// Usage text for a palette tool. `description` is indented under
/// `Description:` as given, so continuation lines carry their own indent.
#[must_use]
pub fn help_text(bin: &str, description: &str) -> String {
    format!(
        "Usage: {bin} [options]

Options:
  -h, --help         Show this help message and exit
  -file <filename>   JSON file containing palettes (optional).
                     If omitted, the program reads JSON input from stdin by default.

Description:
  {description}

Example:
  cat palettes.json | {bin}
  {bin} -file palettes.json
"
    )
}

/// Parses a tool's command line, accepting Go-style single-dash long flags.
///
/// # Errors
///
/// Returns a usage error carrying clap's rendered message.
pub fn parse_args<P, I, T>(args: I) -> CliResult<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    P::try_parse_from(normalize_args(args))
        .map_err(|e| CliError::usage(e.render().to_string().trim_end().to_string()))
}

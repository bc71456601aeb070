//! Error and exit-code types shared by the palette command-line tools.

use crate::models::ColorError;
use thiserror::Error;

/// Process exit codes used by the palette tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Everything succeeded.
    Success = 0,
    /// A fatal runtime error stopped processing.
    Failure = 1,
    /// The command line could not be understood.
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as Self
    }
}

/// Category of a fatal CLI error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Input file could not be opened or read.
    Input,
    /// Input was not a JSON object of palettes.
    Decode,
    /// Output directory could not be created.
    Directory,
    /// A palette color was not a valid hex triplet.
    ColorFormat,
    /// Invalid command-line usage.
    Usage,
}

/// A fatal error reported by a palette tool before exiting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct CliError {
    /// What kind of failure this is.
    pub kind: CliErrorKind,
    /// Human-readable diagnostic.
    pub message: String,
}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    fn new(kind: CliErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Unreadable input.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(CliErrorKind::Input, message)
    }

    /// Malformed palette JSON.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(CliErrorKind::Decode, message)
    }

    /// Output directory could not be created.
    pub fn directory(message: impl Into<String>) -> Self {
        Self::new(CliErrorKind::Directory, message)
    }

    /// Invalid palette color.
    pub fn color_format(message: impl Into<String>) -> Self {
        Self::new(CliErrorKind::ColorFormat, message)
    }

    /// Invalid command-line usage.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(CliErrorKind::Usage, message)
    }

    /// Exit code the process should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Usage => ExitCode::Usage,
            _ => ExitCode::Failure,
        }
    }
}

impl From<ColorError> for CliError {
    fn from(err: ColorError) -> Self {
        Self::color_format(format!("Error generating HTML: {err}"))
    }
}

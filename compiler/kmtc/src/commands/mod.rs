//! Command handlers for the `kmt` CLI.
//!
//! Each submodule implements one command. Shared helpers for reading files,
//! parsing flags and rendering diagnostics live here.

use std::io::IsTerminal;

use kmt_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use kmt_diagnostic::{Diagnostic, Severity};

use crate::AnalysisOptions;

mod check;
mod debug;
mod run;

pub use check::check_file;
pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Why a command did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{0}'")]
    NotFound(String),
    #[error("permission denied reading '{0}'")]
    PermissionDenied(String),
    #[error("'{0}' contains invalid UTF-8 data")]
    InvalidUtf8(String),
    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value for {flag}: '{value}'")]
    InvalidFlag { flag: &'static str, value: String },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("missing file path\nUsage: kmt {0} <file>")]
    MissingPath(&'static str),
    /// Diagnostics were already reported; only the exit status is left.
    #[error("{0} error(s) reported")]
    Diagnostics(usize),
}

impl CliError {
    /// Whether the error still needs to be printed.
    pub fn is_reported(&self) -> bool {
        matches!(self, CliError::Diagnostics(_))
    }
}

/// Read a source file, mapping I/O failures to user-facing errors.
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CliError::NotFound(path.to_string()),
        std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied(path.to_string()),
        std::io::ErrorKind::InvalidData => CliError::InvalidUtf8(path.to_string()),
        _ => CliError::Io {
            path: path.to_string(),
            source: e,
        },
    })
}

/// Split `args` into the single file path and the evaluation options.
///
/// Accepts `--chunk-size=N` and `--threads=N` in any position.
pub fn parse_run_args(
    command: &'static str,
    args: &[String],
) -> Result<(String, AnalysisOptions), CliError> {
    let mut options = AnalysisOptions::default();
    let mut path = None;
    for arg in args {
        if let Some(value) = arg.strip_prefix("--chunk-size=") {
            options = options.with_chunk_size(parse_count("--chunk-size", value)?);
        } else if let Some(value) = arg.strip_prefix("--threads=") {
            options = options.with_threads(parse_count("--threads", value)?);
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        }
    }
    let path = path.ok_or(CliError::MissingPath(command))?;
    Ok((path, options))
}

fn parse_count(flag: &'static str, value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CliError::InvalidFlag {
            flag,
            value: value.to_string(),
        }),
    }
}

/// Print `diagnostics` to stderr with source snippets and a summary line.
///
/// Returns `Err(Diagnostics)` when any of them is an error.
pub(crate) fn report(source: &str, diagnostics: &[Diagnostic]) -> Result<(), CliError> {
    if diagnostics.is_empty() {
        return Ok(());
    }
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(source);
    emitter.emit_all(diagnostics);
    let errors = kmt_diagnostic::error_count(diagnostics);
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning)
        .count();
    emitter.emit_summary(errors, warnings);
    emitter.flush();
    if errors > 0 {
        Err(CliError::Diagnostics(errors))
    } else {
        Ok(())
    }
}

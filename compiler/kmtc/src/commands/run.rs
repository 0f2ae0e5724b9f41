//! The `run` command: analyze a file and print its output.

use std::io::Write;

use super::{read_file, report, CliError};
use crate::{AnalysisOptions, Analyzer};

/// Run a file. Program output goes to stdout, diagnostics to stderr.
pub fn run_file(path: &str, options: AnalysisOptions) -> Result<(), CliError> {
    let source = read_file(path)?;
    let result = Analyzer::new(options).analyze(&source);
    report(&source, &result.diagnostics)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(result.output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source| CliError::Io {
            path: "<stdout>".to_string(),
            source,
        })
}

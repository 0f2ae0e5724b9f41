//! The `check` command: lex, parse and bind without running.

use super::{read_file, report, CliError};

/// Report every front-end diagnostic in `path`.
///
/// Unlike `run`, parser and binder problems are reported even when the
/// lexer also failed, so the user sees everything at once.
pub fn check_file(path: &str) -> Result<(), CliError> {
    let source = read_file(path)?;
    let lexed = kmt_lexer::lex(&source);
    let parsed = kmt_parse::parse(&lexed.tokens);
    let bound = kmt_types::bind(&parsed.program);

    let mut diagnostics = lexed.diagnostics;
    diagnostics.extend(parsed.diagnostics);
    diagnostics.extend(bound.diagnostics);
    report(&source, &diagnostics)?;

    println!(
        "{path}: ok ({} statements, {} globals)",
        bound.program.statements.len(),
        bound.program.globals.len()
    );
    Ok(())
}

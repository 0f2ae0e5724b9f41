//! Recursive descent parser for kmt.
//!
//! Statements are parsed one at a time. When a statement fails, its single
//! [`ParseError`] becomes a diagnostic, the rest of the statement is skipped
//! up to the next `var`/`out`/`print` keyword, and parsing resumes there.
//! The returned [`Program`] holds every statement that parsed cleanly.
//!
//! Expressions use precedence climbing; see [`grammar`] for the rules.

mod cursor;
mod error;
mod escape;
mod grammar;
mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, STMT_BOUNDARY};

use kmt_diagnostic::Diagnostic;
use kmt_ir::{Program, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList<'a>) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        let mut diagnostics = Vec::new();

        while !self.cursor.is_at_end() {
            match self.parse_stmt() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    diagnostics.push(error.to_diagnostic());
                    let skipped = synchronize(&mut self.cursor, STMT_BOUNDARY);
                    tracing::trace!(
                        code = %error.code,
                        skipped,
                        "recovered to next statement"
                    );
                }
            }
        }

        ParseOutput {
            program: Program::new(statements),
            diagnostics,
        }
    }
}

/// The parsed program plus syntax diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseOutput {
    pub program: Program,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Parse a token list into a [`Program`].
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse<'a>(tokens: &'a TokenList<'a>) -> ParseOutput {
    let output = Parser::new(tokens).parse_program();
    tracing::debug!(
        statements = output.program.statements.len(),
        errors = output.diagnostics.len(),
        "parsed"
    );
    output
}

#[cfg(test)]
mod tests;
